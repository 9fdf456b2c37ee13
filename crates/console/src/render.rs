//! The renderer capability boundary.
//!
//! Decision logic (validation, gating, parsing) never prints; it hands
//! finished text and values to a [`Render`] implementation. The console
//! binary installs [`StdoutRenderer`]; tests install a recording fake.

use oxigate_core::telemetry::TelemetryReading;
use oxigate_core::warnings::WarningEntry;

/// Everything the panel can surface to the operator.
///
/// Implementations must be callable from any task, so methods take `&self`
/// and the trait requires `Send + Sync`.
pub trait Render: Send + Sync {
    /// Replace the live RPM readout.
    fn telemetry(&self, reading: TelemetryReading);

    /// Append one warning to the warning surface.
    fn warning(&self, entry: &WarningEntry);

    /// Surface a device acknowledgment (threshold accept, motor state).
    fn acknowledgment(&self, text: &str);

    /// Greet the operator and reveal the control surface.
    fn welcome(&self, name: &str);

    /// Surface a local, operator-correctable error.
    fn error(&self, text: &str);
}

/// Line-oriented renderer for the interactive console.
#[derive(Debug, Default)]
pub struct StdoutRenderer;

impl Render for StdoutRenderer {
    fn telemetry(&self, reading: TelemetryReading) {
        println!("  [rpm] {reading}");
    }

    fn warning(&self, entry: &WarningEntry) {
        println!(
            "  [warning {}] {}",
            entry.received_at.format("%H:%M:%S"),
            entry.message
        );
    }

    fn acknowledgment(&self, text: &str) {
        println!("  [device] {text}");
    }

    fn welcome(&self, name: &str) {
        println!("Welcome, {name}!");
    }

    fn error(&self, text: &str) {
        eprintln!("  [error] {text}");
    }
}
