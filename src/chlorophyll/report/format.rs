//! Text layout of output log entries.
//!
//! Downstream parsers key on the `Filename:` and `is invalid.` lines and on
//! the order of the labelled fields, so the layout below must stay stable.

use std::fmt;

use crate::chlorophyll::analysis::ChannelStatistics;
use crate::chlorophyll::common::error::ComputeError;

/// Separator written after every entry.
const ENTRY_TERMINATOR: &str = " \n \n \n";

/// One block of the output log.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    Analyzed {
        source_path: String,
        statistics: ChannelStatistics,
    },
    Invalid {
        source_path: String,
    },
    Failed {
        source_path: String,
        reason: ComputeError,
    },
}

impl ReportEntry {
    pub fn source_path(&self) -> &str {
        match self {
            ReportEntry::Analyzed { source_path, .. }
            | ReportEntry::Invalid { source_path }
            | ReportEntry::Failed { source_path, .. } => source_path,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Analyzed { source_path, statistics: s } => {
                writeln!(f, "Filename: {}", source_path)?;
                write!(
                    f,
                    "{:>15} {:>3} {:>15} {:>3} {:>15} {:>3} {:>15} {:.6} {:>15} {:.6} {:>15} {:.6} {} {}",
                    "red value",
                    s.average_red,
                    "green value",
                    s.average_green,
                    "blue value",
                    s.average_blue,
                    "red ratio",
                    s.red_ratio,
                    "green ratio",
                    s.green_ratio,
                    "blue ratio",
                    s.blue_ratio,
                    "hue:",
                    s.hue_degrees,
                )?;
            }
            ReportEntry::Invalid { source_path } => {
                write!(f, "File \"{}\" is invalid.", source_path)?;
            }
            ReportEntry::Failed { source_path, reason } => {
                write!(f, "File \"{}\" could not be analyzed: {}.", source_path, reason)?;
            }
        }
        f.write_str(ENTRY_TERMINATOR)
    }
}
