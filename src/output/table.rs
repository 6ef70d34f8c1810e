//! Table output formatter

use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

use super::{Destination, Formatter};
use crate::error::Result;
use crate::report::{ReportRow, ReportTables};

/// Formatter for terminal tables; writes nothing to disk
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn write(&self, tables: &ReportTables, _destination: &Destination) -> Result<Option<PathBuf>> {
        println!("Report 1: License Summary");
        println!("{}", render(&tables.license_summary));
        println!("\nReport 2: Number Detail");
        println!("{}", render(&tables.number_detail));
        println!("\nReport 3: Trunk Detail");
        println!("{}", render(&tables.trunk_detail));
        Ok(None)
    }
}

fn render<R: ReportRow>(rows: &[R]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(R::HEADERS.to_vec());

    for row in rows {
        table.add_row(row.cells());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TrunkDetailRow;

    #[test]
    fn test_render_contains_headers_and_cells() {
        let rows = vec![TrunkDetailRow {
            customer_name: "Acme".to_string(),
            customer_org_id: "1234".to_string(),
            trunk: "SBC-East".to_string(),
            route_group_names: "RG-A".to_string(),
        }];
        let rendered = render(&rows).to_string();
        assert!(rendered.contains("ROUTE GROUP NAME"));
        assert!(rendered.contains("SBC-East"));
    }

    #[test]
    fn test_table_formatter_empty() {
        let dest = Destination::new("unused", "stamp");
        // Should not panic with empty input
        assert!(TableFormatter
            .write(&ReportTables::default(), &dest)
            .unwrap()
            .is_none());
    }
}
