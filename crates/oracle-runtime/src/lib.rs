//! # Epoch Oracle Runtime
//!
//! Wires the four components over one token ledger, one event bus and a
//! local block clock.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and component wiring
//! - `adapters/` - Outbound port implementations connecting components
//! - `clock` - Local block counter driving `CallContext::block_number`
//! - `event_logger` - Structured log of every emitted event
//! - `demo` - One end-to-end epoch for smoke-testing a deployment
//! - `runtime` - Background tasks and graceful shutdown
//!
//! ## Dependency Flow
//!
//! ```text
//! ParameterStore ──→ ObserverStaking ──→ EpochOracle ──→ RewardDistributor
//!        │                                   ↑
//!        └───────────────────────────────────┘
//! ```

pub mod adapters;
pub mod clock;
pub mod container;
pub mod demo;
pub mod event_logger;
pub mod runtime;

pub use clock::BlockClock;
pub use container::{ConfigError, OracleContainer, RuntimeConfig};
pub use demo::{run_demo_epoch, DemoReport};
pub use runtime::OracleRuntime;
