//! Error taxonomy for the domain core.
//!
//! Every variant here is a *local* failure: it is detected before any
//! network traffic and surfaced synchronously to the operator, who can
//! correct the input and retry the same action. Transport-level failures
//! live in `oxigate-device` and never reach this enum.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A threshold candidate violated the validity rule. The message names
    /// the rule that failed (non-positive bound, or min >= max).
    #[error("Invalid thresholds: {0}")]
    InvalidThreshold(String),

    /// A motor toggle was attempted before any accepted threshold
    /// submission.
    #[error("Thresholds have not been accepted by the device yet")]
    NotConfigured,

    /// The operator's display name was empty after trimming.
    #[error("Display name must not be empty")]
    EmptyName,

    /// A raised warning message was empty after trimming.
    #[error("Warning message must not be empty")]
    EmptyWarning,
}
