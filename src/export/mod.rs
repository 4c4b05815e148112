//! Record exporters
//!
//! Provides trait-based export of collected records. Every format writes the
//! same five columns in the same order (see `constants::record::COLUMNS`).

pub mod json;
pub mod xlsx;

use crate::collect::Record;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Information about an export format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for record exporters
pub trait Exporter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// File extension, without the dot
    fn extension(&self) -> &str;

    /// Write records to `path`, one row per record in order
    fn write(&self, records: &[Record], path: &Path) -> Result<()>;
}

/// Get an exporter by name
pub fn get_exporter(name: &str) -> Option<Box<dyn Exporter>> {
    match name.to_lowercase().as_str() {
        "xlsx" => Some(Box::new(xlsx::XlsxExporter)),
        "json" => Some(Box::new(json::JsonExporter)),
        _ => None,
    }
}

/// List all available export formats
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "xlsx".to_string(),
            description: "Excel spreadsheet".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "JSON array of records".to_string(),
        },
    ]
}

/// Output path for a base name: `<base_name>.<extension>`
pub fn output_path(base_name: &str, exporter: &dyn Exporter) -> PathBuf {
    PathBuf::from(format!("{}.{}", base_name, exporter.extension()))
}

/// Export records to `<base_name>.<extension>` and return the written path
pub fn export(records: &[Record], base_name: &str, exporter: &dyn Exporter) -> Result<PathBuf> {
    let path = output_path(base_name, exporter);
    exporter.write(records, &path)?;
    info!(path = %path.display(), records = records.len(), format = exporter.name(), "Exported records");
    Ok(path)
}
