//! # Oracle Runtime
//!
//! Owns the component container and the background tasks:
//!
//! - **Block clock**: advances one block every `block_time`
//! - **Event logger**: writes every emitted event to the log
//!
//! Both stop when [`OracleRuntime::shutdown`] signals the watch channel.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::clock::BlockClock;
use crate::container::{OracleContainer, RuntimeConfig};
use crate::event_logger::EventLogger;

/// Grace period for background tasks to observe the shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// The runtime orchestrating all components.
pub struct OracleRuntime {
    container: Arc<OracleContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    tasks: parking_lot::Mutex<Vec<JoinHandle<()>>>,
}

impl OracleRuntime {
    /// Wire every component from `config`.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        info!("Creating epoch oracle runtime");

        let container = Arc::new(OracleContainer::new(config)?);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            container,
            shutdown_tx,
            shutdown_rx,
            tasks: parking_lot::Mutex::new(Vec::new()),
        })
    }

    /// Spawn the block clock and the event logger.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  Epoch Oracle Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let logger = EventLogger::new(&self.container.event_bus);
        let mut logger_shutdown = self.shutdown_rx.clone();
        let logger_task = tokio::spawn(async move {
            tokio::select! {
                _ = logger.run() => {}
                _ = logger_shutdown.changed() => {
                    info!("[EventLogger] Shutdown signal received");
                }
            }
        });

        let clock = Arc::clone(&self.container.clock);
        let block_time = self.container.config.block_time;
        let mut clock_shutdown = self.shutdown_rx.clone();
        let clock_task = tokio::spawn(async move {
            tokio::select! {
                _ = run_clock(clock, block_time) => {}
                _ = clock_shutdown.changed() => {
                    info!("[BlockClock] Shutdown signal received");
                }
            }
        });

        self.tasks.lock().extend([logger_task, clock_task]);

        let config = &self.container.config;
        info!(
            start_block = self.container.clock.current(),
            block_time_ms = config.block_time.as_millis() as u64,
            epoch_end_block = config.epoch_end_block,
            "Runtime started"
        );
        Ok(())
    }

    /// Signal shutdown and wait for background tasks to stop.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        let tasks: Vec<_> = self.tasks.lock().drain(..).collect();
        for task in tasks {
            if tokio::time::timeout(SHUTDOWN_GRACE, task).await.is_err() {
                error!("Background task did not stop within the grace period");
            }
        }

        info!(
            final_block = self.container.clock.current(),
            "Shutdown complete"
        );
    }

    pub fn container(&self) -> Arc<OracleContainer> {
        Arc::clone(&self.container)
    }
}

/// Advance `clock` by one block per tick.
async fn run_clock(clock: Arc<BlockClock>, block_time: Duration) {
    let mut interval = tokio::time::interval(block_time);
    // The first tick completes immediately.
    interval.tick().await;
    loop {
        interval.tick().await;
        let block = clock.advance();
        debug!(block, "Block mined");
    }
}
