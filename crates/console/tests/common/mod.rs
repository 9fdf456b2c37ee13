//! Shared test doubles: an in-memory device with programmable responses
//! and a renderer that records everything it is asked to surface.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use oxigate_console::render::Render;
use oxigate_core::telemetry::TelemetryReading;
use oxigate_core::thresholds::ThresholdConfig;
use oxigate_core::warnings::WarningEntry;
use oxigate_device::{DeviceApiError, DeviceBackend};

// ---------------------------------------------------------------------------
// MockDevice
// ---------------------------------------------------------------------------

/// A scripted response for one poll.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Serve this body with HTTP 200.
    Body(String),
    /// Serve this body with HTTP 200, but only after the delay elapses.
    /// Lets a test overlap in-flight polls and control completion order.
    Delayed(Duration, String),
    /// Answer with this non-200 status.
    Status(u16),
}

impl Scripted {
    pub fn body(text: &str) -> Self {
        Scripted::Body(text.to_string())
    }
}

#[derive(Debug, Default)]
struct MockState {
    submit_calls: usize,
    toggle_calls: usize,
    rpm_calls: usize,
    warning_calls: usize,
    /// How many upcoming submissions answer 503 before succeeding.
    failing_submits: usize,
    motor_on: bool,
    rpm_script: VecDeque<Scripted>,
    warning_script: VecDeque<Scripted>,
}

/// In-memory [`DeviceBackend`] with request counters and scripted poll
/// responses. Queues drain one entry per poll; an exhausted queue serves
/// the device's quiescent answer (`0` RPM, empty warning).
#[derive(Debug, Default)]
pub struct MockDevice {
    state: Mutex<MockState>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_rpm(&self, responses: impl IntoIterator<Item = Scripted>) {
        self.state.lock().unwrap().rpm_script.extend(responses);
    }

    pub fn script_warnings(&self, responses: impl IntoIterator<Item = Scripted>) {
        self.state.lock().unwrap().warning_script.extend(responses);
    }

    /// Make the next `n` submissions fail with HTTP 503.
    pub fn fail_next_submits(&self, n: usize) {
        self.state.lock().unwrap().failing_submits = n;
    }

    pub fn submit_calls(&self) -> usize {
        self.state.lock().unwrap().submit_calls
    }

    pub fn toggle_calls(&self) -> usize {
        self.state.lock().unwrap().toggle_calls
    }

    pub fn rpm_calls(&self) -> usize {
        self.state.lock().unwrap().rpm_calls
    }

    pub fn warning_calls(&self) -> usize {
        self.state.lock().unwrap().warning_calls
    }
}

fn status_error(status: u16) -> DeviceApiError {
    DeviceApiError::Status {
        status,
        body: String::new(),
    }
}

#[async_trait]
impl DeviceBackend for MockDevice {
    async fn submit_thresholds(
        &self,
        _config: &ThresholdConfig,
    ) -> Result<String, DeviceApiError> {
        let mut state = self.state.lock().unwrap();
        state.submit_calls += 1;
        if state.failing_submits > 0 {
            state.failing_submits -= 1;
            return Err(status_error(503));
        }
        Ok("Values updated".to_string())
    }

    async fn toggle_motor(&self) -> Result<String, DeviceApiError> {
        let mut state = self.state.lock().unwrap();
        state.toggle_calls += 1;
        state.motor_on = !state.motor_on;
        Ok(if state.motor_on { "Motor is ON" } else { "Motor is OFF" }.to_string())
    }

    async fn read_rpm(&self) -> Result<TelemetryReading, DeviceApiError> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.rpm_calls += 1;
            state.rpm_script.pop_front()
        };
        match scripted {
            None => Ok(TelemetryReading { rpm: 0.0 }),
            Some(Scripted::Body(body)) => Ok(TelemetryReading::parse(&body)?),
            Some(Scripted::Delayed(after, body)) => {
                tokio::time::sleep(after).await;
                Ok(TelemetryReading::parse(&body)?)
            }
            Some(Scripted::Status(status)) => Err(status_error(status)),
        }
    }

    async fn read_warning(&self) -> Result<String, DeviceApiError> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.warning_calls += 1;
            state.warning_script.pop_front()
        };
        match scripted {
            None => Ok(String::new()),
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Delayed(after, body)) => {
                tokio::time::sleep(after).await;
                Ok(body)
            }
            Some(Scripted::Status(status)) => Err(status_error(status)),
        }
    }

    async fn raise_warning(&self, message: &str) -> Result<String, DeviceApiError> {
        // Raised warnings become the next poll's body, like the firmware's
        // warning slot.
        self.state
            .lock()
            .unwrap()
            .warning_script
            .push_back(Scripted::body(message));
        Ok("Warning message received".to_string())
    }
}

// ---------------------------------------------------------------------------
// RecordingRenderer
// ---------------------------------------------------------------------------

/// One recorded presentation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Telemetry(f64),
    Warning(String),
    Ack(String),
    Welcome(String),
    Error(String),
}

/// [`Render`] implementation that records calls for assertion.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<Rendered>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    /// Just the RPM values, in render order.
    pub fn telemetry_values(&self) -> Vec<f64> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Rendered::Telemetry(rpm) => Some(rpm),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Rendered) {
        self.events.lock().unwrap().push(event);
    }
}

impl Render for RecordingRenderer {
    fn telemetry(&self, reading: TelemetryReading) {
        self.record(Rendered::Telemetry(reading.rpm));
    }

    fn warning(&self, entry: &WarningEntry) {
        self.record(Rendered::Warning(entry.message.clone()));
    }

    fn acknowledgment(&self, text: &str) {
        self.record(Rendered::Ack(text.to_string()));
    }

    fn welcome(&self, name: &str) {
        self.record(Rendered::Welcome(name.to_string()));
    }

    fn error(&self, text: &str) {
        self.record(Rendered::Error(text.to_string()));
    }
}
