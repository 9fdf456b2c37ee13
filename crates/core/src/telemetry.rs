//! Telemetry parsing and display.
//!
//! The device reports exactly one quantity: the current motor speed. The
//! `/get_rpm` body is a bare decimal number; anything else is a failed
//! reading and leaves the previously rendered value in place.

use std::fmt;
use std::num::ParseFloatError;

use serde::Serialize;

/// A single RPM reading. Most-recent-wins; no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryReading {
    pub rpm: f64,
}

impl TelemetryReading {
    /// Parse a raw `/get_rpm` response body.
    ///
    /// Bodies may carry surrounding whitespace; trim before parsing.
    pub fn parse(body: &str) -> Result<Self, ParseFloatError> {
        let rpm = body.trim().parse::<f64>()?;
        Ok(Self { rpm })
    }
}

impl fmt::Display for TelemetryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} RPM", self.rpm)
    }
}
