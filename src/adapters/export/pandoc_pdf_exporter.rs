//! Pandoc-backed PDF results exporter.
//!
//! Renders the Markdown form of the results and pipes it through Pandoc.
//! Pandoc (plus a LaTeX engine) must be installed; otherwise export fails
//! with `ServiceUnavailable`.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::analysis::ResultsTable;
use crate::ports::{ExportError, ExportFormat, ResultsExporter};

use super::MarkdownResultsExporter;

/// Default conversion timeout in seconds.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 30;

/// PDF export through an external Pandoc process.
///
/// # Example
///
/// ```rust,ignore
/// let exporter = PandocPdfExporter::new()
///     .with_pandoc_path("/usr/local/bin/pandoc")
///     .with_timeout(60);
///
/// let pdf = exporter.export(&table).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PandocPdfExporter {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,

    /// Timeout for PDF conversion in seconds.
    timeout_secs: u64,

    markdown: MarkdownResultsExporter,
}

impl Default for PandocPdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PandocPdfExporter {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
            markdown: MarkdownResultsExporter::new(),
        }
    }

    /// Set a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Set the timeout for PDF conversion.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Check if Pandoc is installed and accessible.
    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }

    async fn convert(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "-V",
                "geometry:margin=1in",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExportError::conversion_failed(
                    ExportFormat::Pdf,
                    format!("failed to start Pandoc: {}", e),
                )
            })?;

        // The write shares the deadline: a stalled Pandoc stops draining stdin.
        let stdin = child.stdin.take();
        let run = async move {
            if let Some(mut stdin) = stdin {
                stdin
                    .write_all(markdown.as_bytes())
                    .await
                    .map_err(|e| ExportError::io(format!("failed to write to Pandoc: {}", e)))?;
            }
            child
                .wait_with_output()
                .await
                .map_err(|e| ExportError::io(format!("Pandoc execution failed: {}", e)))
        };

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), run)
            .await
            .map_err(|_| ExportError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::conversion_failed(
                ExportFormat::Pdf,
                format!("Pandoc returned error: {}", stderr.trim()),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ResultsExporter for PandocPdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    async fn export(&self, table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let markdown = self.markdown.render(table)?;
        let pdf = self.convert(&markdown).await?;
        tracing::debug!(rows = table.rows.len(), bytes = pdf.len(), "pdf results rendered");
        Ok(pdf)
    }

    async fn is_available(&self) -> bool {
        self.check_pandoc().await
    }
}
