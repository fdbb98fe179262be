//! Common utilities module
//!
//! Shared error types used by every stage of the estimator.

pub mod error;

pub use error::{ComputeError, EstimationError, Result};
