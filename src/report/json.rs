use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::pipeline::stage5_report::EnrichedAgency;
use crate::report::{ReportError, SummaryData};

pub fn write_enriched_json(path: &Path, records: &[EnrichedAgency]) -> Result<(), ReportError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &SummaryData) -> Result<(), ReportError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}
