//! Threshold validation, submission, and session-state ownership.

use std::sync::Arc;

use tokio::sync::watch;

use oxigate_core::error::CoreError;
use oxigate_core::session::SessionState;
use oxigate_core::thresholds::ThresholdConfig;
use oxigate_device::DeviceBackend;

/// Validates and submits threshold configurations.
///
/// This component is the single owner of [`SessionState`]: it starts
/// `Unconfigured` and flips to `Configured` on the first acknowledged
/// submission. Other components observe the state read-only through
/// [`watch`](ThresholdConfigurator::watch).
pub struct ThresholdConfigurator<B> {
    backend: Arc<B>,
    state_tx: watch::Sender<SessionState>,
}

impl<B: DeviceBackend> ThresholdConfigurator<B> {
    pub fn new(backend: Arc<B>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Unconfigured);
        Self { backend, state_tx }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.state_tx.borrow()
    }

    /// A read-only view of the session state for other components.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Validate and submit a four-bound candidate.
    ///
    /// Local validation failures come back as
    /// [`CoreError::InvalidThreshold`] with no request sent. On an
    /// acknowledged submission (HTTP 200) the session state flips to
    /// `Configured` and the device's acknowledgment text is returned.
    ///
    /// Any other outcome (non-200 status or a transport failure) is
    /// logged and collapses to `Ok(None)`: no state change and nothing
    /// surfaced to the operator. The contract treats such submissions as
    /// if they never happened, so there is no retry here.
    pub async fn submit(
        &self,
        min_oxygen: f64,
        max_oxygen: f64,
        min_pulse_rate: f64,
        max_pulse_rate: f64,
    ) -> Result<Option<String>, CoreError> {
        let config = ThresholdConfig::new(min_oxygen, max_oxygen, min_pulse_rate, max_pulse_rate)?;

        match self.backend.submit_thresholds(&config).await {
            Ok(ack) => {
                self.state_tx.send_replace(SessionState::Configured);
                tracing::info!(?config, "Thresholds accepted by device");
                Ok(Some(ack))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Threshold submission failed; session state unchanged");
                Ok(None)
            }
        }
    }
}
