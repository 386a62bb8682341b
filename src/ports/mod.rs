//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FileStorage` - Whole-file reads and writes for state import/export
//! - `ResultsExporter` - Rendering the ranked results into an output format

mod file_storage;
mod results_exporter;

pub use file_storage::{FileStorage, StorageError};
pub use results_exporter::{ExportError, ExportFormat, ExportedDocument, ResultsExporter};
