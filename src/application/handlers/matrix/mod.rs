//! Matrix state and results handlers.

mod export_results;
mod export_state;
mod import_state;

pub use export_results::{ExportResultsCommand, ExportResultsHandler, ExportResultsResult};
pub use export_state::{ExportStateCommand, ExportStateHandler, ExportStateResult};
pub use import_state::{ImportStateCommand, ImportStateHandler, ImportStateResult};
