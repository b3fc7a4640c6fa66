//! Candidate scheduling and result collection.
//!
//! The [`pipeline::Scanner`] fans name list lines out over a bounded set of
//! tokio tasks. Each task runs validate → resolve → probe for one candidate
//! and publishes a single report into the [`sink::ResultSink`], which hands
//! them back in input order once the run is over.

pub mod pipeline;
pub mod progress;
pub mod sink;

pub use pipeline::{scan_candidate, ScanOutcome, ScanSettings, Scanner};
pub use sink::ResultSink;
