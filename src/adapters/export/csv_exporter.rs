//! CSV results exporter.
//!
//! Writes a `Solution,Score` header followed by one row per ranked solution.
//! Quoting of names containing commas, quotes or newlines is handled by the
//! `csv` writer.

use async_trait::async_trait;

use crate::domain::analysis::ResultsTable;
use crate::ports::{ExportError, ExportFormat, ResultsExporter};

/// Renders results as comma-delimited text.
#[derive(Debug, Clone, Default)]
pub struct CsvResultsExporter;

impl CsvResultsExporter {
    pub fn new() -> Self {
        Self
    }

    fn render(table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(table.headers())
            .map_err(|e| ExportError::conversion_failed(ExportFormat::Csv, e.to_string()))?;
        for row in table.string_rows() {
            writer
                .write_record(&row)
                .map_err(|e| ExportError::conversion_failed(ExportFormat::Csv, e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::io(e.to_string()))
    }
}

#[async_trait]
impl ResultsExporter for CsvResultsExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    async fn export(&self, table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
        let bytes = Self::render(table)?;
        tracing::debug!(rows = table.rows.len(), bytes = bytes.len(), "csv results rendered");
        Ok(bytes)
    }
}
