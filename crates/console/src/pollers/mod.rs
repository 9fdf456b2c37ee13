//! The two polling loops.
//!
//! Telemetry and warnings poll on independent, unsynchronized clocks.
//! Each poller is a cancellable task (explicit start/stop via a
//! [`CancellationToken`](tokio_util::sync::CancellationToken)), and each
//! tick's network call runs as its own spawned task, so one slow request
//! never delays the schedule or the other poller.

pub mod telemetry;
pub mod warnings;

pub use telemetry::TelemetryPoller;
pub use warnings::WarningPoller;
