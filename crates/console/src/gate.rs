//! The motor gate.

use std::sync::Arc;

use tokio::sync::watch;

use oxigate_core::error::CoreError;
use oxigate_core::session::SessionState;
use oxigate_device::DeviceBackend;

/// Gates motor toggling on an acknowledged threshold submission.
///
/// Holds a read-only view of the session state owned by the
/// [`ThresholdConfigurator`](crate::configurator::ThresholdConfigurator).
/// The device owns the actual on/off state; this component keeps no local
/// flag and applies no debouncing, so every accepted activation is one
/// request.
pub struct MotorGate<B> {
    backend: Arc<B>,
    state: watch::Receiver<SessionState>,
}

impl<B: DeviceBackend> MotorGate<B> {
    pub fn new(backend: Arc<B>, state: watch::Receiver<SessionState>) -> Self {
        Self { backend, state }
    }

    /// Toggle the motor.
    ///
    /// Fails fast with [`CoreError::NotConfigured`], sending no request,
    /// until the observed session state is `Configured`. After that, one
    /// GET per invocation; a 200 returns the device's acknowledgment text,
    /// anything else is logged and collapses to `Ok(None)` (the preserved
    /// silent no-op, as in the configurator).
    pub async fn toggle(&self) -> Result<Option<String>, CoreError> {
        if !self.state.borrow().is_configured() {
            return Err(CoreError::NotConfigured);
        }

        match self.backend.toggle_motor().await {
            Ok(ack) => {
                tracing::info!(ack = %ack, "Motor toggle acknowledged");
                Ok(Some(ack))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Motor toggle failed");
                Ok(None)
            }
        }
    }
}
