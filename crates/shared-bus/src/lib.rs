//! # Shared Bus - Event Bus for Oracle Events
//!
//! Every component publishes its events (`ObserverStaked`, `SealEpoch`,
//! `Claim`, ...) through the [`EventPublisher`] trait. The runtime wires an
//! [`InMemoryEventBus`] so that off-chain listeners can subscribe; tests wire
//! an [`EventLog`] to assert on exact event sequences.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Component   │                    │   Listener   │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, OracleEvent};
pub use publisher::{EventLog, EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
