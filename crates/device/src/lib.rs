//! HTTP client for the sensor-gated motor device.
//!
//! The device firmware serves a five-operation plain-text contract:
//! threshold submission, motor toggle, RPM read, warning read, and warning
//! injection. [`api::DeviceApi`] implements it over [`reqwest`];
//! [`backend::DeviceBackend`] is the trait seam the console consumes so
//! tests can substitute an in-memory device.

pub mod api;
pub mod backend;

pub use api::{DeviceApi, DeviceApiError};
pub use backend::DeviceBackend;
