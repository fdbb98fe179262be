//! Run configuration types

use std::path::PathBuf;

/// Log file every run appends to. Changing the destination means changing
/// this constant.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Configuration for a batch of estimations
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Text log that receives one entry per input
    pub output_path: PathBuf,
    /// Whether to log the end-of-run counts at info level
    pub log_summary: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_summary: true,
        }
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

/// Builder for RunConfig
#[derive(Default)]
pub struct RunConfigBuilder {
    output_path: Option<PathBuf>,
    log_summary: Option<bool>,
}

impl RunConfigBuilder {
    pub fn output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn log_summary(mut self, enable: bool) -> Self {
        self.log_summary = Some(enable);
        self
    }

    pub fn build(self) -> RunConfig {
        let default = RunConfig::default();
        RunConfig {
            output_path: self.output_path.unwrap_or(default.output_path),
            log_summary: self.log_summary.unwrap_or(default.log_summary),
        }
    }
}
