//! Session state and the operator identity.
//!
//! [`SessionState`] is the single fact gating motor control: whether the
//! device has acknowledged a threshold submission in this session. It is
//! deliberately an explicit enum owned by the configurator rather than an
//! ambient boolean, so state transitions are testable in isolation.

use serde::Serialize;

use crate::error::CoreError;

/// Whether the device has accepted a threshold submission this session.
///
/// Starts [`Unconfigured`](SessionState::Unconfigured) and flips to
/// [`Configured`](SessionState::Configured) only on an HTTP 200
/// acknowledgment. It never reverts: there is no expiry and no
/// revalidation for the lifetime of the console process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Unconfigured,
    Configured,
}

impl SessionState {
    /// True once a submission has been acknowledged.
    pub fn is_configured(self) -> bool {
        matches!(self, SessionState::Configured)
    }
}

/// The operator's identity for this console session.
///
/// The name-entry surface is shown until [`begin`](OperatorSession::begin)
/// succeeds, then hidden for the remainder of the session. Nothing is
/// persisted across restarts.
#[derive(Debug, Default)]
pub struct OperatorSession {
    display_name: Option<String>,
}

impl OperatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the operator's display name.
    ///
    /// Fails with [`CoreError::EmptyName`] when the trimmed name is empty.
    /// On success returns the recorded name. A second successful call
    /// replaces the name, but the console never offers one; the entry
    /// surface is hidden after the first.
    pub fn begin(&mut self, name: &str) -> Result<&str, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        self.display_name = Some(trimmed.to_string());
        Ok(self.display_name.as_deref().unwrap_or_default())
    }

    /// The recorded display name, if `begin` has succeeded.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Whether the name-entry surface should still be shown.
    pub fn needs_name(&self) -> bool {
        self.display_name.is_none()
    }
}
