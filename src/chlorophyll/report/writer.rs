use crate::chlorophyll::common::error::Result;
use crate::chlorophyll::report::format::ReportEntry;

pub trait ReportWriter {
    fn append_entry(&self, entry: &ReportEntry) -> Result<()>;
}
