//! Results Exporter Port - Rendering the ranked results table.
//!
//! Every exporter receives the same logical [`ResultsTable`]: two columns,
//! `Solution` and `Score`, already in rank order. Exporters decide only how
//! the rows look in their target format.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::ResultsTable;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for rendering a results table into one output format.
///
/// # Contract
///
/// Implementations must:
/// - Emit the header row (`Solution`, `Score`) before any data row
/// - Preserve the row order of the table exactly
/// - Report clear errors for conversion failures
#[async_trait]
pub trait ResultsExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the table.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails.
    async fn export(&self, table: &ResultsTable) -> Result<Vec<u8>, ExportError>;

    /// Check if the exporter can run (external converters installed, etc).
    async fn is_available(&self) -> bool {
        true
    }
}

/// Export formats for the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-delimited text rows.
    Csv,
    /// SpreadsheetML workbook with a single worksheet.
    Spreadsheet,
    /// Markdown table with YAML front matter.
    Markdown,
    /// Paginated document with a page-numbered footer.
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Spreadsheet,
        ExportFormat::Markdown,
        ExportFormat::Pdf,
    ];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Spreadsheet => "application/vnd.ms-excel",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Spreadsheet => "xml",
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Spreadsheet => write!(f, "spreadsheet"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "spreadsheet" | "xml" => Ok(ExportFormat::Spreadsheet),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported results with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during results export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// External converter (e.g., Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rendering into the target format failed.
    #[error("{format} conversion failed: {reason}")]
    ConversionFailed { format: ExportFormat, reason: String },

    /// Timeout during conversion.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// I/O error during conversion.
    #[error("I/O error during export: {0}")]
    Io(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn conversion_failed(format: ExportFormat, reason: impl Into<String>) -> Self {
        Self::ConversionFailed {
            format,
            reason: reason.into(),
        }
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            ExportError::ServiceUnavailable(_) | ExportError::Timeout(_) => {
                ErrorCode::ServiceUnavailable
            }
            ExportError::ConversionFailed { .. } => ErrorCode::InternalError,
            ExportError::Io(_) => ErrorCode::IoFailure,
        }
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
