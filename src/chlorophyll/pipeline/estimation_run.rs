use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::chlorophyll::{
    analysis::Estimator,
    common::error::{EstimationError, Result},
    raster::{ImageCrateReader, RasterReader},
    report::{AppendLogWriter, ReportEntry, ReportWriter, RunConfig},
};

/// What happened to a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Analyzed,
    Invalid,
    Failed,
}

/// Counts for one call to [`EstimationRun::process_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub analyzed: usize,
    pub invalid: usize,
    pub failed: usize,
    /// Entries that could not be appended to the log
    pub write_failures: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.analyzed + self.invalid + self.failed
    }

    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Analyzed => self.analyzed += 1,
            FileOutcome::Invalid => self.invalid += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

pub struct EstimationRun<R: RasterReader, W: ReportWriter> {
    reader: R,
    writer: W,
    config: RunConfig,
}

impl EstimationRun<ImageCrateReader, AppendLogWriter> {
    pub fn new(config: RunConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: AppendLogWriter::new(config.output_path.clone()),
            config,
        }
    }
}

impl<R: RasterReader, W: ReportWriter> EstimationRun<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RunConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Analyzes one file and appends its entry to the log.
    ///
    /// Decode and compute failures become log entries and are reported as
    /// the returned outcome; only a failure to write the entry is an error.
    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn process_file<P: AsRef<Path>>(&self, input_path: P) -> Result<FileOutcome> {
        let input_path = input_path.as_ref();
        let (outcome, entry) = self.analyze(input_path);

        {
            let _span = tracing::info_span!("append_report").entered();
            self.writer.append_entry(&entry)?;
        }

        Ok(outcome)
    }

    /// Processes every path in order. A failure on one path never stops the
    /// ones after it.
    pub fn process_all<I, P>(&self, inputs: I) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary::default();

        for input in inputs {
            let input = input.as_ref();
            match self.process_file(input) {
                Ok(outcome) => summary.record(outcome),
                Err(e) => {
                    error!(input = %input.display(), "Could not record result: {}", e);
                    summary.write_failures += 1;
                }
            }
        }

        if self.config.log_summary {
            info!(
                analyzed = summary.analyzed,
                invalid = summary.invalid,
                failed = summary.failed,
                write_failures = summary.write_failures,
                "Run complete"
            );
        }

        summary
    }

    fn analyze(&self, input_path: &Path) -> (FileOutcome, ReportEntry) {
        let source_path = input_path.to_string_lossy().into_owned();

        let mut estimator = match Estimator::open_with(input_path, &self.reader) {
            Ok(estimator) => estimator,
            Err(e) => {
                warn!("Invalid input: {}", e);
                return (FileOutcome::Invalid, ReportEntry::Invalid { source_path });
            }
        };

        match estimator.compute_statistics() {
            Ok(statistics) => {
                info!(
                    red = statistics.average_red,
                    green = statistics.average_green,
                    blue = statistics.average_blue,
                    hue = statistics.hue_degrees,
                    "Analyzed"
                );
                let statistics = *statistics;
                (
                    FileOutcome::Analyzed,
                    ReportEntry::Analyzed { source_path, statistics },
                )
            }
            Err(reason) => {
                warn!("{}", EstimationError::from(reason));
                (FileOutcome::Failed, ReportEntry::Failed { source_path, reason })
            }
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}
