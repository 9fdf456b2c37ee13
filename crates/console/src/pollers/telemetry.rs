//! Periodic RPM fetch-and-render.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use oxigate_core::telemetry::TelemetryReading;
use oxigate_device::DeviceBackend;

use crate::render::Render;

/// Polls `/get_rpm` on a fixed period and renders each successful reading.
///
/// A failed tick (transport error, non-200, unparsable body) leaves the
/// previously rendered value in place with no error indicator; the
/// failure is only logged. Responses can complete out of issue order, and
/// the last one to finish wins; there is no staleness guard.
pub struct TelemetryPoller<B> {
    backend: Arc<B>,
    renderer: Arc<dyn Render>,
    period: Duration,
    latest: Arc<Mutex<Option<TelemetryReading>>>,
}

impl<B: DeviceBackend + 'static> TelemetryPoller<B> {
    pub fn new(backend: Arc<B>, renderer: Arc<dyn Render>, period: Duration) -> Self {
        Self {
            backend,
            renderer,
            period,
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Shared cell holding the most recently completed reading.
    pub fn latest(&self) -> Arc<Mutex<Option<TelemetryReading>>> {
        Arc::clone(&self.latest)
    }

    /// Spawn the polling loop. It runs until `cancel` is triggered.
    pub fn spawn(self, cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    async fn run(self, cancel: CancellationToken) {
        tracing::info!(period_secs = self.period.as_secs(), "Telemetry poller started");

        // First tick fires one full period after start, not immediately.
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Telemetry poller stopping");
                    break;
                }
                _ = interval.tick() => {
                    // Fetch in a child task so a slow or hung request
                    // never delays the next scheduled tick.
                    let backend = Arc::clone(&self.backend);
                    let renderer = Arc::clone(&self.renderer);
                    let latest = Arc::clone(&self.latest);
                    tokio::spawn(async move {
                        match backend.read_rpm().await {
                            Ok(reading) => {
                                *latest.lock().expect("telemetry cell lock") = Some(reading);
                                renderer.telemetry(reading);
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "Telemetry poll failed; keeping last value");
                            }
                        }
                    });
                }
            }
        }
    }
}
