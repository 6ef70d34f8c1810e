//! CSV output formatter

use std::path::PathBuf;

use log::info;

use super::common::csv_document;
use super::{ensure_dir, Destination, Formatter};
use crate::error::Result;
use crate::report::ReportTables;

/// Formatter for CSV output: one directory per run, one file per report
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn write(&self, tables: &ReportTables, destination: &Destination) -> Result<Option<PathBuf>> {
        let dir = destination.artifact(None);
        ensure_dir(&dir)?;

        let base = destination.base_name();
        let documents = [
            csv_document(&tables.license_summary),
            csv_document(&tables.number_detail),
            csv_document(&tables.trunk_detail),
        ];
        for (index, document) in documents.iter().enumerate() {
            let path = dir.join(format!("{}_{}.csv", base, index + 1));
            std::fs::write(&path, document)?;
            info!("Wrote {}", path.display());
        }

        Ok(Some(dir))
    }
}
