//! # Epoch Oracle Node
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Wire components in dependency order
//! 4. Start the block clock and the event logger
//! 5. Optionally run one demo epoch
//! 6. Wait for Ctrl+C, then shut down

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use oracle_runtime::{run_demo_epoch, OracleRuntime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;
    let demo = config.demo;

    let runtime = OracleRuntime::new(config).context("Failed to wire components")?;
    runtime.start().await?;

    if demo {
        let report = run_demo_epoch(&runtime.container()).context("Demo epoch failed")?;
        info!(
            epoch = report.epoch,
            claimed = report.claimed,
            distributed = %report.distributed,
            "Demo epoch complete"
        );
    }

    info!("Oracle is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
