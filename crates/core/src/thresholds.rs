//! Threshold configuration and its validity rule.
//!
//! A [`ThresholdConfig`] carries the four safety bounds the operator sets:
//! oxygen saturation min/max and pulse-rate min/max. Construction is the
//! only way to obtain one, and construction enforces the validity rule, so
//! a `ThresholdConfig` in hand is always submittable. The accepted,
//! authoritative copy lives on the device; the client never mutates a
//! config in place; a new submission replaces it wholesale.

use serde::Serialize;

use crate::error::CoreError;

/// Wire field names, matching the device's form parameters.
const FIELD_MIN_OXYGEN: &str = "minOxygen";
const FIELD_MAX_OXYGEN: &str = "maxOxygen";
const FIELD_MIN_PULSE_RATE: &str = "minPulseRate";
const FIELD_MAX_PULSE_RATE: &str = "maxPulseRate";

/// A validated four-bound threshold configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdConfig {
    pub min_oxygen: f64,
    pub max_oxygen: f64,
    pub min_pulse_rate: f64,
    pub max_pulse_rate: f64,
}

impl ThresholdConfig {
    /// Validate the four candidate bounds and construct a config.
    ///
    /// Rejects with [`CoreError::InvalidThreshold`] if any bound is `<= 0`,
    /// if `min_oxygen >= max_oxygen`, or if `min_pulse_rate >=
    /// max_pulse_rate`. Equality counts as invalid for both pairs.
    pub fn new(
        min_oxygen: f64,
        max_oxygen: f64,
        min_pulse_rate: f64,
        max_pulse_rate: f64,
    ) -> Result<Self, CoreError> {
        validate_positive(min_oxygen, FIELD_MIN_OXYGEN)?;
        validate_positive(max_oxygen, FIELD_MAX_OXYGEN)?;
        validate_positive(min_pulse_rate, FIELD_MIN_PULSE_RATE)?;
        validate_positive(max_pulse_rate, FIELD_MAX_PULSE_RATE)?;

        if min_oxygen >= max_oxygen {
            return Err(CoreError::InvalidThreshold(format!(
                "{FIELD_MIN_OXYGEN} ({min_oxygen}) must be strictly less than {FIELD_MAX_OXYGEN} ({max_oxygen})"
            )));
        }
        if min_pulse_rate >= max_pulse_rate {
            return Err(CoreError::InvalidThreshold(format!(
                "{FIELD_MIN_PULSE_RATE} ({min_pulse_rate}) must be strictly less than {FIELD_MAX_PULSE_RATE} ({max_pulse_rate})"
            )));
        }

        Ok(Self {
            min_oxygen,
            max_oxygen,
            min_pulse_rate,
            max_pulse_rate,
        })
    }

    /// Render the config as form-encoded key/value pairs in the device's
    /// wire field names and order.
    pub fn to_form(&self) -> [(&'static str, String); 4] {
        [
            (FIELD_MIN_OXYGEN, format_bound(self.min_oxygen)),
            (FIELD_MAX_OXYGEN, format_bound(self.max_oxygen)),
            (FIELD_MIN_PULSE_RATE, format_bound(self.min_pulse_rate)),
            (FIELD_MAX_PULSE_RATE, format_bound(self.max_pulse_rate)),
        ]
    }
}

/// Validate that a bound is strictly positive.
///
/// NaN fails this check too: a comparison against NaN is false, so the
/// `> 0.0` test rejects it along with zero and negatives.
fn validate_positive(value: f64, name: &str) -> Result<(), CoreError> {
    if !(value > 0.0) {
        return Err(CoreError::InvalidThreshold(format!(
            "{name} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Format a bound for the wire. Integral values print without a fraction
/// (`90`, not `90.0`), matching what the device firmware parses.
fn format_bound(value: f64) -> String {
    format!("{value}")
}
