//! Periodic warning fetch-and-append.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use oxigate_device::DeviceBackend;

use crate::render::Render;

/// Polls `/get/warning` on a fixed period, appending each successful
/// response body to the session's warning log.
///
/// The whole body is one warning string and is appended verbatim, so the
/// log grows by exactly one entry per successful poll. The device clears
/// its warning slot after each read, so most bodies are empty; those
/// append an empty entry. Repeated text is logged twice, and the log
/// never evicts.
pub struct WarningPoller<B> {
    backend: Arc<B>,
    renderer: Arc<dyn Render>,
    period: Duration,
    log: Arc<Mutex<oxigate_core::warnings::WarningLog>>,
}

impl<B: DeviceBackend + 'static> WarningPoller<B> {
    pub fn new(backend: Arc<B>, renderer: Arc<dyn Render>, period: Duration) -> Self {
        Self {
            backend,
            renderer,
            period,
            log: Arc::new(Mutex::new(oxigate_core::warnings::WarningLog::new())),
        }
    }

    /// Shared handle to the append-only warning log.
    pub fn log(&self) -> Arc<Mutex<oxigate_core::warnings::WarningLog>> {
        Arc::clone(&self.log)
    }

    /// Spawn the polling loop. It runs until `cancel` is triggered.
    pub fn spawn(self, cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    async fn run(self, cancel: CancellationToken) {
        tracing::info!(period_secs = self.period.as_secs(), "Warning poller started");

        let mut interval = time::interval_at(Instant::now() + self.period, self.period);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Warning poller stopping");
                    break;
                }
                _ = interval.tick() => {
                    let backend = Arc::clone(&self.backend);
                    let renderer = Arc::clone(&self.renderer);
                    let log = Arc::clone(&self.log);
                    tokio::spawn(async move {
                        match backend.read_warning().await {
                            Ok(body) => {
                                let (entry, total) = {
                                    let mut log = log.lock().expect("warning log lock");
                                    let entry = log.append(body).clone();
                                    (entry, log.len())
                                };
                                renderer.warning(&entry);
                                if entry.message.is_empty() {
                                    tracing::debug!(total, "Warning poll appended empty entry");
                                } else {
                                    tracing::info!(total, "Warning received");
                                }
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "Warning poll failed");
                            }
                        }
                    });
                }
            }
        }
    }
}
