//! Console configuration loaded from environment variables.

use std::time::Duration;

/// Default device base URL (the firmware's usual station address).
const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

/// Default telemetry polling period, in seconds.
const DEFAULT_RPM_INTERVAL_SECS: u64 = 1;

/// Default warning polling period, in seconds.
const DEFAULT_WARNING_INTERVAL_SECS: u64 = 5;

/// Runtime settings for the console binary.
///
/// All fields have defaults suitable for talking to a device on the local
/// network; override via environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base HTTP URL of the device.
    pub device_url: String,
    /// Period of the telemetry (RPM) poller.
    pub rpm_interval: Duration,
    /// Period of the warning poller. Independent of the telemetry clock.
    pub warning_interval: Duration,
}

impl ConsoleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default              |
    /// |-------------------------|----------------------|
    /// | `DEVICE_URL`            | `http://192.168.4.1` |
    /// | `RPM_INTERVAL_SECS`     | `1`                  |
    /// | `WARNING_INTERVAL_SECS` | `5`                  |
    pub fn from_env() -> Self {
        let device_url =
            std::env::var("DEVICE_URL").unwrap_or_else(|_| DEFAULT_DEVICE_URL.to_string());

        let rpm_interval_secs: u64 = std::env::var("RPM_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RPM_INTERVAL_SECS);

        let warning_interval_secs: u64 = std::env::var("WARNING_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_WARNING_INTERVAL_SECS);

        Self {
            device_url,
            rpm_interval: Duration::from_secs(rpm_interval_secs),
            warning_interval: Duration::from_secs(warning_interval_secs),
        }
    }
}
