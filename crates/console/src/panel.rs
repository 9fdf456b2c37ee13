//! Operator command parsing and dispatch.
//!
//! The panel owns the user-triggered half of the console: the operator
//! session, the threshold configurator, the motor gate, and warning
//! injection. The pollers run beside it and share nothing but the
//! renderer and the backend.

use std::sync::Arc;

use oxigate_core::error::CoreError;
use oxigate_core::session::{OperatorSession, SessionState};
use oxigate_device::DeviceBackend;

use crate::configurator::ThresholdConfigurator;
use crate::gate::MotorGate;
use crate::render::Render;

/// One-line usage text, shown on startup and on unrecognized input.
pub const USAGE: &str = "commands: name <display name> | set <minO2> <maxO2> <minPulse> <maxPulse> | toggle | warn <message> | quit";

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Name(String),
    Set {
        min_oxygen: f64,
        max_oxygen: f64,
        min_pulse_rate: f64,
        max_pulse_rate: f64,
    },
    Toggle,
    Warn(String),
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// A blank line parses to `None`. Unrecognized commands and
    /// non-numeric `set` arguments come back as `Err` with a message fit
    /// for the operator.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "name" => Ok(Some(Command::Name(rest.to_string()))),
            "set" => {
                let mut bounds = [0.0_f64; 4];
                let parts: Vec<&str> = rest.split_whitespace().collect();
                if parts.len() != 4 {
                    return Err(format!("set takes four values. {USAGE}"));
                }
                for (slot, part) in bounds.iter_mut().zip(&parts) {
                    *slot = part
                        .parse()
                        .map_err(|_| format!("'{part}' is not a number"))?;
                }
                Ok(Some(Command::Set {
                    min_oxygen: bounds[0],
                    max_oxygen: bounds[1],
                    min_pulse_rate: bounds[2],
                    max_pulse_rate: bounds[3],
                }))
            }
            "toggle" => Ok(Some(Command::Toggle)),
            "warn" => Ok(Some(Command::Warn(rest.to_string()))),
            "quit" | "exit" => Ok(Some(Command::Quit)),
            other => Err(format!("unknown command '{other}'. {USAGE}")),
        }
    }
}

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFlow {
    Continue,
    Quit,
}

/// The user-triggered control surface.
pub struct Panel<B> {
    session: OperatorSession,
    configurator: ThresholdConfigurator<B>,
    gate: MotorGate<B>,
    backend: Arc<B>,
    renderer: Arc<dyn Render>,
}

impl<B: DeviceBackend> Panel<B> {
    pub fn new(backend: Arc<B>, renderer: Arc<dyn Render>) -> Self {
        let configurator = ThresholdConfigurator::new(Arc::clone(&backend));
        let gate = MotorGate::new(Arc::clone(&backend), configurator.watch());
        Self {
            session: OperatorSession::new(),
            configurator,
            gate,
            backend,
            renderer,
        }
    }

    /// Current session state (owned by the configurator).
    pub fn session_state(&self) -> SessionState {
        self.configurator.state()
    }

    /// The operator's display name, once recorded.
    pub fn operator_name(&self) -> Option<&str> {
        self.session.display_name()
    }

    /// Parse and execute one operator line.
    pub async fn handle_line(&mut self, line: &str) -> PanelFlow {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return PanelFlow::Continue,
            Err(message) => {
                self.renderer.error(&message);
                return PanelFlow::Continue;
            }
        };

        match command {
            Command::Name(name) => {
                // Name entry is one-shot: after the first success it is
                // gone for the rest of the session.
                if !self.session.needs_name() {
                    self.renderer
                        .error("A display name is already set for this session");
                } else {
                    match self.session.begin(&name) {
                        Ok(recorded) => {
                            let recorded = recorded.to_string();
                            self.renderer.welcome(&recorded);
                        }
                        Err(e) => self.renderer.error(&e.to_string()),
                    }
                }
            }
            Command::Set {
                min_oxygen,
                max_oxygen,
                min_pulse_rate,
                max_pulse_rate,
            } => {
                match self
                    .configurator
                    .submit(min_oxygen, max_oxygen, min_pulse_rate, max_pulse_rate)
                    .await
                {
                    Ok(Some(ack)) => self.renderer.acknowledgment(&ack),
                    // Backend failure: already logged, nothing surfaced.
                    Ok(None) => {}
                    Err(e) => self.renderer.error(&e.to_string()),
                }
            }
            Command::Toggle => match self.gate.toggle().await {
                Ok(Some(ack)) => self.renderer.acknowledgment(&ack),
                Ok(None) => {}
                Err(e) => self.renderer.error(&e.to_string()),
            },
            Command::Warn(message) => {
                let message = message.trim();
                if message.is_empty() {
                    self.renderer.error(&CoreError::EmptyWarning.to_string());
                } else {
                    match self.backend.raise_warning(message).await {
                        Ok(ack) => self.renderer.acknowledgment(&ack),
                        Err(e) => {
                            tracing::warn!(error = %e, "Raising a warning failed");
                        }
                    }
                }
            }
            Command::Quit => return PanelFlow::Quit,
        }

        PanelFlow::Continue
    }
}
