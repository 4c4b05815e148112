//! JSON exporter

use crate::collect::Record;
use crate::error::Result;
use crate::export::Exporter;
use std::fs;
use std::path::Path;

/// JSON exporter - an array of records keyed by the spreadsheet headers
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of records"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn write(&self, records: &[Record], path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(path, json)?;
        Ok(())
    }
}
