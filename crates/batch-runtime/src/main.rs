use anyhow::{Context, Result};
use batch_runtime::{init_telemetry, run, RuntimeConfig, TelemetryConfig};
use tracing::{error, info};

fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("initializing logging")?;

    let config = RuntimeConfig::from_env();
    info!(?config, "Configuration loaded");

    match run(&config) {
        Ok(path) => {
            info!(path = %path.display(), "Results written");
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "Batch failed");
            Err(e)
        }
    }
}
