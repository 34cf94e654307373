//! # Distributor Metrics
//!
//! Enable with the `metrics` feature.
//!
//! - `distributor_claims_total` - Counter of paid claims
//! - `distributor_claims_rejected_total` - Counter of rejected claims (by code)
//! - `distributor_batch_claims_total` - Counter of processed batches

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Paid claims
    pub static ref CLAIMS: IntCounter = register_int_counter!(
        "distributor_claims_total",
        "Total number of paid claims"
    )
    .expect("Failed to create CLAIMS metric");

    /// Rejected claims, labeled by error code
    pub static ref CLAIMS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "distributor_claims_rejected_total",
        "Total number of rejected claims",
        &["code"]
    )
    .expect("Failed to create CLAIMS_REJECTED metric");

    /// Processed batches
    pub static ref BATCH_CLAIMS: IntCounter = register_int_counter!(
        "distributor_batch_claims_total",
        "Total number of processed batch claims"
    )
    .expect("Failed to create BATCH_CLAIMS metric");
}

#[cfg(feature = "metrics")]
pub fn record_claim() {
    CLAIMS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_claim_rejected(code: &str) {
    CLAIMS_REJECTED.with_label_values(&[code]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_batch_claim() {
    BATCH_CLAIMS.inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_claim() {}

#[cfg(not(feature = "metrics"))]
pub fn record_claim_rejected(_code: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_batch_claim() {}
