//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Whole-file storage (local filesystem, in-memory)
//! - `export` - Results renderers (CSV, spreadsheet, Markdown, PDF)
//! - `cli` - Command-line driving adapter

pub mod cli;
pub mod export;
pub mod storage;

pub use export::{
    CsvResultsExporter, MarkdownResultsExporter, PandocPdfExporter, SpreadsheetResultsExporter,
};
pub use storage::{InMemoryFileStorage, LocalFileStorage};
