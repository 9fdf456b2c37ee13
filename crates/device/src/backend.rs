//! The backend seam between the console and the device.
//!
//! The console's configurator, gate, and pollers talk to the device
//! through this trait rather than [`DeviceApi`](crate::api::DeviceApi)
//! directly, so integration tests can drive the whole panel against an
//! in-memory device with programmable responses.

use async_trait::async_trait;

use oxigate_core::telemetry::TelemetryReading;
use oxigate_core::thresholds::ThresholdConfig;

use crate::api::{DeviceApi, DeviceApiError};

/// The five device operations the console depends on.
#[async_trait]
pub trait DeviceBackend: Send + Sync {
    /// POST the four threshold bounds; `Ok` carries the acknowledgment text.
    async fn submit_thresholds(&self, config: &ThresholdConfig)
        -> Result<String, DeviceApiError>;

    /// Toggle the motor; `Ok` carries the acknowledgment text.
    async fn toggle_motor(&self) -> Result<String, DeviceApiError>;

    /// Read the current motor speed.
    async fn read_rpm(&self) -> Result<TelemetryReading, DeviceApiError>;

    /// Read the pending warning text (possibly empty).
    async fn read_warning(&self) -> Result<String, DeviceApiError>;

    /// Raise a warning on the device.
    async fn raise_warning(&self, message: &str) -> Result<String, DeviceApiError>;
}

#[async_trait]
impl DeviceBackend for DeviceApi {
    async fn submit_thresholds(
        &self,
        config: &ThresholdConfig,
    ) -> Result<String, DeviceApiError> {
        DeviceApi::submit_thresholds(self, config).await
    }

    async fn toggle_motor(&self) -> Result<String, DeviceApiError> {
        DeviceApi::toggle_motor(self).await
    }

    async fn read_rpm(&self) -> Result<TelemetryReading, DeviceApiError> {
        DeviceApi::read_rpm(self).await
    }

    async fn read_warning(&self) -> Result<String, DeviceApiError> {
        DeviceApi::read_warning(self).await
    }

    async fn raise_warning(&self, message: &str) -> Result<String, DeviceApiError> {
        DeviceApi::raise_warning(self, message).await
    }
}
