//! Terminal operator panel for the sensor-gated motor device.
//!
//! Wires the domain core to the device client: the threshold
//! configurator and motor gate run on operator commands, while two
//! independent pollers keep the RPM readout and the warning log fresh.
//! Presentation goes through the [`render::Render`] trait so every
//! decision path is testable without a terminal.

pub mod config;
pub mod configurator;
pub mod gate;
pub mod panel;
pub mod pollers;
pub mod render;

pub use config::ConsoleConfig;
pub use configurator::ThresholdConfigurator;
pub use gate::MotorGate;
pub use panel::Panel;
pub use render::{Render, StdoutRenderer};
