//! REST client for the device's HTTP endpoints.
//!
//! All request and response bodies are plain text. Only HTTP 200 has a
//! defined meaning; any other status is reported as
//! [`DeviceApiError::Status`] with the raw body attached for logging.

use oxigate_core::telemetry::TelemetryReading;
use oxigate_core::thresholds::ThresholdConfig;

/// HTTP client for a single device.
pub struct DeviceApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the device API layer.
#[derive(Debug, thiserror::Error)]
pub enum DeviceApiError {
    /// The HTTP request itself failed (network, DNS, connection reset).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The device returned a non-200 status code.
    #[error("Device returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for the operator-facing log.
        body: String,
    },

    /// The `/get_rpm` body did not parse as a decimal number.
    #[error("Unparsable RPM body: {0}")]
    Telemetry(#[from] std::num::ParseFloatError),
}

impl DeviceApi {
    /// Create a new API client for a device.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://192.168.4.1`.
    ///
    /// No request timeout is configured: a request that never completes
    /// simply never resolves, and the next poller tick proceeds without it.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Submit a threshold configuration.
    ///
    /// Sends `POST /set/values` with the four bounds form-encoded. Returns
    /// the device's human-readable acknowledgment text.
    pub async fn submit_thresholds(
        &self,
        config: &ThresholdConfig,
    ) -> Result<String, DeviceApiError> {
        tracing::debug!(?config, "Submitting thresholds");
        let response = self
            .client
            .post(format!("{}/set/values", self.base_url))
            .form(&config.to_form())
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// Toggle the motor.
    ///
    /// Sends `GET /toggle/motor`. The device owns the on/off state; the
    /// returned text reports which side it landed on.
    pub async fn toggle_motor(&self) -> Result<String, DeviceApiError> {
        tracing::debug!("Requesting motor toggle");
        let response = self
            .client
            .get(format!("{}/toggle/motor", self.base_url))
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// Read the current motor speed.
    ///
    /// Sends `GET /get_rpm` and parses the body as a decimal RPM value.
    pub async fn read_rpm(&self) -> Result<TelemetryReading, DeviceApiError> {
        let response = self
            .client
            .get(format!("{}/get_rpm", self.base_url))
            .send()
            .await?;

        let body = Self::read_ok_body(response).await?;
        Ok(TelemetryReading::parse(&body)?)
    }

    /// Read the pending warning.
    ///
    /// Sends `GET /get/warning`. The device clears its pending warning
    /// after serving it, so the body is frequently empty.
    pub async fn read_warning(&self) -> Result<String, DeviceApiError> {
        let response = self
            .client
            .get(format!("{}/get/warning", self.base_url))
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// Raise a warning on the device.
    ///
    /// Sends `POST /set/warning` with the message form-encoded. The next
    /// warning read (from any client) observes it.
    pub async fn raise_warning(&self, message: &str) -> Result<String, DeviceApiError> {
        let response = self
            .client
            .post(format!("{}/set/warning", self.base_url))
            .form(&[("message", message)])
            .send()
            .await?;

        Self::read_ok_body(response).await
    }

    /// Return the body of a 200 response, or [`DeviceApiError::Status`]
    /// carrying the body of anything else.
    async fn read_ok_body(response: reqwest::Response) -> Result<String, DeviceApiError> {
        let status = response.status();
        let body = response.text().await?;
        if status == reqwest::StatusCode::OK {
            Ok(body)
        } else {
            Err(DeviceApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
