//! Report sink
//!
//! Writes the three report tables as CSV files, a JSON or YAML document,
//! or prints them as terminal tables.

mod common;
mod csv;
mod json;
mod table;

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::defaults;
use crate::error::Result;
use crate::report::ReportTables;

pub use self::common::escape_csv;
pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// Where a run's report artifact goes
#[derive(Debug, Clone)]
pub struct Destination {
    pub output_dir: PathBuf,
    /// Run timestamp, shared with the run log name
    pub stamp: String,
}

impl Destination {
    pub fn new(output_dir: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            stamp: stamp.into(),
        }
    }

    /// `calling_report_<stamp>`
    pub fn base_name(&self) -> String {
        format!("{}_{}", defaults::REPORT_PREFIX, self.stamp)
    }

    /// Path of an artifact named after the run inside the output directory
    pub fn artifact(&self, extension: Option<&str>) -> PathBuf {
        let name = match extension {
            Some(ext) => format!("{}.{}", self.base_name(), ext),
            None => self.base_name(),
        };
        self.output_dir.join(name)
    }
}

/// Trait for report formatters
pub trait Formatter {
    /// Write the tables; returns the artifact path when one was created
    fn write(&self, tables: &ReportTables, destination: &Destination) -> Result<Option<PathBuf>>;
}

/// Write the report tables in the requested format
pub fn write_report(
    tables: &ReportTables,
    format: &OutputFormat,
    destination: &Destination,
) -> Result<Option<PathBuf>> {
    match format {
        OutputFormat::Csv => CsvFormatter.write(tables, destination),
        OutputFormat::Json => JsonFormatter.write(tables, destination),
        OutputFormat::Yaml => YamlFormatter.write(tables, destination),
        OutputFormat::Table => TableFormatter.write(tables, destination),
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
