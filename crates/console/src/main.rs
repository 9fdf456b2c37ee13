//! `oxigate-console` -- terminal operator panel for the sensor-gated
//! motor device.
//!
//! Starts the two pollers (RPM readout and warning log), then reads
//! operator commands from stdin until `quit` or EOF.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default              | Description                    |
//! |-------------------------|----------|----------------------|--------------------------------|
//! | `DEVICE_URL`            | no       | `http://192.168.4.1` | Base HTTP URL of the device    |
//! | `RPM_INTERVAL_SECS`     | no       | `1`                  | Telemetry polling period       |
//! | `WARNING_INTERVAL_SECS` | no       | `5`                  | Warning polling period         |

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oxigate_console::panel::{PanelFlow, USAGE};
use oxigate_console::pollers::{TelemetryPoller, WarningPoller};
use oxigate_console::{ConsoleConfig, Panel, Render, StdoutRenderer};
use oxigate_device::DeviceApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oxigate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env();

    tracing::info!(
        device_url = %config.device_url,
        rpm_interval_secs = config.rpm_interval.as_secs(),
        warning_interval_secs = config.warning_interval.as_secs(),
        "Starting oxigate-console",
    );

    let backend = Arc::new(DeviceApi::new(config.device_url.clone()));
    let renderer: Arc<dyn Render> = Arc::new(StdoutRenderer);

    let cancel = CancellationToken::new();
    let telemetry_task = TelemetryPoller::new(
        Arc::clone(&backend),
        Arc::clone(&renderer),
        config.rpm_interval,
    )
    .spawn(cancel.child_token());
    let warning_task = WarningPoller::new(
        Arc::clone(&backend),
        Arc::clone(&renderer),
        config.warning_interval,
    )
    .spawn(cancel.child_token());

    let mut panel = Panel::new(backend, renderer);

    println!("{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if panel.handle_line(&line).await == PanelFlow::Quit {
                        break;
                    }
                }
                // EOF or an unreadable stdin both end the session.
                Ok(None) | Err(_) => break,
            }
        }
    }

    tracing::info!("Stopping pollers");
    cancel.cancel();
    let _ = telemetry_task.await;
    let _ = warning_task.await;
}
