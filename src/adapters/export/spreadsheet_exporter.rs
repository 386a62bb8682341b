//! Spreadsheet results exporter.
//!
//! Produces a SpreadsheetML 2003 workbook: plain XML that spreadsheet
//! applications open directly. One worksheet, a bold header row, string
//! cells for solution names and numeric cells for scores.

use async_trait::async_trait;

use crate::domain::analysis::ResultsTable;
use crate::ports::{ExportError, ExportFormat, ResultsExporter};

const WORKBOOK_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Styles>
  <Style ss:ID="header"><Font ss:Bold="1"/></Style>
 </Styles>
"#;

/// Maximum worksheet name length accepted by spreadsheet applications.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Renders results as a single-sheet SpreadsheetML workbook.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetResultsExporter;

impl SpreadsheetResultsExporter {
    pub fn new() -> Self {
        Self
    }

    fn sheet_name(title: &str) -> String {
        let cleaned: String = title
            .chars()
            .filter(|c| !matches!(c, '\\' | '/' | '?' | '*' | '[' | ']' | ':'))
            .take(MAX_SHEET_NAME_LEN)
            .collect();
        if cleaned.trim().is_empty() {
            "Results".to_string()
        } else {
            cleaned
        }
    }

    fn render(table: &ResultsTable) -> String {
        let mut xml = String::from(WORKBOOK_HEADER);
        xml.push_str(&format!(
            " <Worksheet ss:Name=\"{}\">\n  <Table>\n",
            xml_escape(&Self::sheet_name(&table.title))
        ));

        xml.push_str("   <Row ss:StyleID=\"header\">\n");
        for header in table.headers() {
            xml.push_str(&format!(
                "    <Cell><Data ss:Type=\"String\">{}</Data></Cell>\n",
                xml_escape(header)
            ));
        }
        xml.push_str("   </Row>\n");

        for row in &table.rows {
            xml.push_str("   <Row>\n");
            xml.push_str(&format!(
                "    <Cell><Data ss:Type=\"String\">{}</Data></Cell>\n",
                xml_escape(&row.name)
            ));
            xml.push_str(&format!(
                "    <Cell><Data ss:Type=\"Number\">{}</Data></Cell>\n",
                row.score
            ));
            xml.push_str("   </Row>\n");
        }

        xml.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
        xml
    }
}

#[async_trait]
impl ResultsExporter for SpreadsheetResultsExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Spreadsheet
    }

    async fn export(&self, table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
        let xml = Self::render(table);
        tracing::debug!(rows = table.rows.len(), bytes = xml.len(), "spreadsheet results rendered");
        Ok(xml.into_bytes())
    }
}

/// Escape XML special characters.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
