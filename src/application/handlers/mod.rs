//! Application handlers.
//!
//! Command handlers that move the matrix between memory, state files and
//! results documents.

pub mod matrix;

pub use matrix::{
    ExportResultsCommand, ExportResultsHandler, ExportResultsResult, ExportStateCommand,
    ExportStateHandler, ExportStateResult, ImportStateCommand, ImportStateHandler,
    ImportStateResult,
};
