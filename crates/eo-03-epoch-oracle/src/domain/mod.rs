//! Domain module for the epoch oracle

pub mod epoch;

pub use epoch::{EpochRecord, SubmissionOutcome};
