//! Batch driver module
//!
//! Runs the estimator over a list of files and records each outcome in the
//! output log, in input order.

mod estimation_run;


pub use estimation_run::{EstimationRun, FileOutcome, RunSummary};
