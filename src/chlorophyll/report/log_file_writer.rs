use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chlorophyll::common::error::{EstimationError, Result};
use crate::chlorophyll::report::format::ReportEntry;
use crate::chlorophyll::report::writer::ReportWriter;

/// Appends entries to a text log, opening and closing the file for every
/// entry so that entries already on disk survive a crash mid-run.
pub struct AppendLogWriter {
    path: PathBuf,
}

impl AppendLogWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for AppendLogWriter {
    fn append_entry(&self, entry: &ReportEntry) -> Result<()> {
        let text = entry.to_string();
        debug!("Appending {} bytes to {}", text.len(), self.path.display());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                EstimationError::OutputWriteError(format!("{}: {}", self.path.display(), e))
            })?;

        // Single write so a partially formatted entry never reaches the log.
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| {
                EstimationError::OutputWriteError(format!("{}: {}", self.path.display(), e))
            })
    }
}
