//! Output log module
//!
//! Formats per-file results and appends them to the text log.

mod format;
mod writer;
mod log_file_writer;
pub mod types;

pub use format::ReportEntry;
pub use writer::ReportWriter;
pub use log_file_writer::AppendLogWriter;
pub use types::{DEFAULT_OUTPUT_PATH, RunConfig, RunConfigBuilder};
