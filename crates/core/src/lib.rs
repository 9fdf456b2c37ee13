//! Domain core for the oxigate operator console.
//!
//! Pure logic only: threshold validation, session state, the warning log,
//! and telemetry parsing. No I/O, no runtime; the `oxigate-device` and
//! `oxigate-console` crates layer those on top.

pub mod error;
pub mod session;
pub mod telemetry;
pub mod thresholds;
pub mod warnings;

pub use error::CoreError;
pub use session::{OperatorSession, SessionState};
pub use telemetry::TelemetryReading;
pub use thresholds::ThresholdConfig;
pub use warnings::{WarningEntry, WarningLog};
