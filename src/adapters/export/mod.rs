//! Results Export Adapters
//!
//! Implementations of the ResultsExporter port, one per output format.
//!
//! - **CsvResultsExporter** - Delimited text via the `csv` crate
//! - **SpreadsheetResultsExporter** - SpreadsheetML workbook
//! - **MarkdownResultsExporter** - Pipe table with YAML front matter
//! - **PandocPdfExporter** - Markdown rendered to PDF by Pandoc

mod csv_exporter;
mod markdown_exporter;
mod pandoc_pdf_exporter;
mod spreadsheet_exporter;

pub use csv_exporter::CsvResultsExporter;
pub use markdown_exporter::MarkdownResultsExporter;
pub use pandoc_pdf_exporter::{PandocPdfExporter, DEFAULT_PDF_TIMEOUT_SECS};
pub use spreadsheet_exporter::SpreadsheetResultsExporter;
