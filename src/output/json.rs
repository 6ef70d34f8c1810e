//! JSON and YAML output formatters

use std::path::PathBuf;

use log::info;

use super::{ensure_dir, Destination, Formatter};
use crate::error::{ReportError, Result};
use crate::report::ReportTables;

/// Formatter for a single JSON document
pub struct JsonFormatter;

/// Formatter for a single YAML document
pub struct YamlFormatter;

impl Formatter for JsonFormatter {
    fn write(&self, tables: &ReportTables, destination: &Destination) -> Result<Option<PathBuf>> {
        let document = serde_json::to_string_pretty(tables)?;
        write_document(destination, "json", &document).map(Some)
    }
}

impl Formatter for YamlFormatter {
    fn write(&self, tables: &ReportTables, destination: &Destination) -> Result<Option<PathBuf>> {
        let document = serde_yml::to_string(tables)
            .map_err(|e| ReportError::Output(format!("Error serializing to YAML: {}", e)))?;
        write_document(destination, "yaml", &document).map(Some)
    }
}

fn write_document(destination: &Destination, extension: &str, document: &str) -> Result<PathBuf> {
    ensure_dir(&destination.output_dir)?;
    let path = destination.artifact(Some(extension));
    std::fs::write(&path, document)?;
    info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{NumberDetailRow, TrunkDetailRow};
    use tempfile::TempDir;

    fn tables() -> ReportTables {
        let mut tables = ReportTables::default();
        tables.number_detail.push(NumberDetailRow {
            customer_name: "Acme".to_string(),
            phone_number: "15551230001".to_string(),
            ..Default::default()
        });
        tables.trunk_detail.push(TrunkDetailRow {
            trunk: "SBC-East".to_string(),
            ..Default::default()
        });
        tables
    }

    #[test]
    fn test_json_document_keys() {
        let dir = TempDir::new().unwrap();
        let dest = Destination::new(dir.path().join("nested"), "stamp");

        let path = JsonFormatter.write(&tables(), &dest).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "calling_report_stamp.json");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(value["license_summary"].as_array().unwrap().is_empty());
        assert_eq!(value["number_detail"][0]["Phone Number"], "15551230001");
        assert_eq!(value["trunk_detail"][0]["TRUNK"], "SBC-East");
    }

    #[test]
    fn test_yaml_document() {
        let dir = TempDir::new().unwrap();
        let dest = Destination::new(dir.path(), "stamp");

        let path = YamlFormatter.write(&tables(), &dest).unwrap().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("trunk_detail:"));
        assert!(content.contains("SBC-East"));
    }
}
