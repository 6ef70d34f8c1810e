//! Common utilities for output formatters

use crate::report::ReportRow;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Header line plus one line per row
pub(crate) fn csv_document<R: ReportRow>(rows: &[R]) -> String {
    let mut out = csv_line(R::HEADERS.iter().map(|h| h.to_string()));
    for row in rows {
        out.push_str(&csv_line(row.cells()));
    }
    out
}

fn csv_line(cells: impl IntoIterator<Item = String>) -> String {
    let mut line = cells
        .into_iter()
        .map(|c| escape_csv(&c))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TrunkDetailRow;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("RG-A,RG-B"), "\"RG-A,RG-B\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_escape_csv_empty() {
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_csv_document() {
        let rows = vec![TrunkDetailRow {
            customer_name: "Acme, Inc".to_string(),
            customer_org_id: "1234".to_string(),
            trunk: "SBC-East".to_string(),
            route_group_names: "RG-A,RG-B".to_string(),
        }];
        let doc = csv_document(&rows);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "Customer Name,Customer Org ID,TRUNK,ROUTE GROUP NAME");
        assert_eq!(lines[1], "\"Acme, Inc\",1234,SBC-East,\"RG-A,RG-B\"");
    }

    #[test]
    fn test_csv_document_header_only() {
        let rows: Vec<TrunkDetailRow> = Vec::new();
        assert_eq!(csv_document(&rows).lines().count(), 1);
    }
}
