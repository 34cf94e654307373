//! # Oracle Metrics
//!
//! Prometheus metrics for vote intake and sealing.
//!
//! Enable with the `metrics` feature:
//! ```toml
//! eo-03-epoch-oracle = { path = "...", features = ["metrics"] }
//! ```
//!
//! - `oracle_votes_accepted_total` - Counter of counted votes
//! - `oracle_votes_rejected_total` - Counter of rejected votes (by code)
//! - `oracle_epochs_sealed_total` - Counter of sealed epochs
//! - `oracle_last_sealed_epoch` - Gauge of the latest sealed epoch

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Votes counted towards a tally
    pub static ref VOTES_ACCEPTED: IntCounter = register_int_counter!(
        "oracle_votes_accepted_total",
        "Total number of votes counted"
    )
    .expect("Failed to create VOTES_ACCEPTED metric");

    /// Votes rejected, labeled by error code
    pub static ref VOTES_REJECTED: IntCounterVec = register_int_counter_vec!(
        "oracle_votes_rejected_total",
        "Total number of rejected votes",
        &["code"]
    )
    .expect("Failed to create VOTES_REJECTED metric");

    /// Epochs sealed
    pub static ref EPOCHS_SEALED: IntCounter = register_int_counter!(
        "oracle_epochs_sealed_total",
        "Total number of epochs sealed"
    )
    .expect("Failed to create EPOCHS_SEALED metric");

    /// Latest sealed epoch
    pub static ref LAST_SEALED_EPOCH: IntGauge = register_int_gauge!(
        "oracle_last_sealed_epoch",
        "Most recently sealed epoch"
    )
    .expect("Failed to create LAST_SEALED_EPOCH metric");
}

#[cfg(feature = "metrics")]
pub fn record_vote_accepted() {
    VOTES_ACCEPTED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_vote_rejected(code: &str) {
    VOTES_REJECTED.with_label_values(&[code]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_epoch_sealed(epoch: u64) {
    EPOCHS_SEALED.inc();
    LAST_SEALED_EPOCH.set(i64::try_from(epoch).unwrap_or(i64::MAX));
}

#[cfg(not(feature = "metrics"))]
pub fn record_vote_accepted() {}

#[cfg(not(feature = "metrics"))]
pub fn record_vote_rejected(_code: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_epoch_sealed(_epoch: u64) {}
