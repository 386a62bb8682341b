//! ExportResultsHandler - Writes the ranked results in a chosen format.
//!
//! Scores are computed and ranked here, on explicit request, then rendered
//! by the exporter registered for the requested format.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::analysis::{RankedSolution, ResultsTable, DEFAULT_RESULTS_TITLE};
use crate::domain::foundation::DomainError;
use crate::domain::matrix::MatrixModel;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, FileStorage, ResultsExporter};

/// Command to export the results table.
#[derive(Debug, Clone)]
pub struct ExportResultsCommand {
    pub path: PathBuf,
    pub format: ExportFormat,
}

impl ExportResultsCommand {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

/// Result of a successful results export.
#[derive(Debug, Clone)]
pub struct ExportResultsResult {
    pub document: ExportedDocument,
    pub path: PathBuf,
    pub rows: Vec<RankedSolution>,
}

/// Handler for exporting results.
///
/// # Dependencies
///
/// - `FileStorage`: Write the rendered document
/// - `ResultsExporter`: One per supported format
///
/// # Usage
///
/// ```rust,ignore
/// let handler = ExportResultsHandler::new(storage)
///     .with_exporter(Arc::new(CsvResultsExporter::new()));
/// let cmd = ExportResultsCommand::new("Results.csv", ExportFormat::Csv);
/// let result = handler.handle(cmd, &model).await?;
/// ```
pub struct ExportResultsHandler {
    storage: Arc<dyn FileStorage>,
    exporters: HashMap<ExportFormat, Arc<dyn ResultsExporter>>,
    title: String,
}

impl ExportResultsHandler {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self {
            storage,
            exporters: HashMap::new(),
            title: DEFAULT_RESULTS_TITLE.to_string(),
        }
    }

    /// Registers an exporter, replacing any previous one for its format.
    pub fn with_exporter(mut self, exporter: Arc<dyn ResultsExporter>) -> Self {
        self.exporters.insert(exporter.format(), exporter);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn supports(&self, format: ExportFormat) -> bool {
        self.exporters.contains_key(&format)
    }

    pub async fn handle(
        &self,
        cmd: ExportResultsCommand,
        model: &MatrixModel,
    ) -> Result<ExportResultsResult, DomainError> {
        // 1. Pick the exporter
        let exporter = self
            .exporters
            .get(&cmd.format)
            .ok_or_else(|| ExportError::UnsupportedFormat(cmd.format.to_string()))?;

        // 2. Score and rank
        let table = ResultsTable::from_scores(self.title.clone(), &model.compute_scores());

        // 3. Render
        let content = exporter.export(&table).await.map_err(|err| {
            tracing::warn!(format = %cmd.format, error = %err, "results export failed");
            DomainError::from(err)
        })?;

        // 4. Persist under the extension the content actually has
        let path = output_path(&cmd.path, cmd.format);
        if path != cmd.path {
            tracing::info!(
                requested = %cmd.path.display(),
                path = %path.display(),
                "output extension replaced to match format"
            );
        }
        self.storage.write(&path, &content).await?;

        tracing::info!(
            path = %path.display(),
            format = %cmd.format,
            rows = table.rows.len(),
            "results exported"
        );

        let base_filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.title.as_str())
            .to_string();

        Ok(ExportResultsResult {
            document: ExportedDocument::new(content, cmd.format, &base_filename),
            path,
            rows: table.rows,
        })
    }
}

/// Swaps a mismatched extension for the one the format produces.
///
/// Paths with no extension are left alone.
fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.eq_ignore_ascii_case(format.extension()) => {
            path.with_extension(format.extension())
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::{CsvResultsExporter, SpreadsheetResultsExporter};
    use crate::adapters::storage::InMemoryFileStorage;
    use crate::domain::foundation::{ErrorCode, Importance, RatingCell};
    use async_trait::async_trait;

    struct UnavailableExporter;

    #[async_trait]
    impl ResultsExporter for UnavailableExporter {
        fn format(&self) -> ExportFormat {
            ExportFormat::Pdf
        }

        async fn export(&self, _table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::service_unavailable("no converter"))
        }

        async fn is_available(&self) -> bool {
            false
        }
    }

    fn scored_model() -> MatrixModel {
        let mut model = MatrixModel::default();
        model.set_importance(0, Importance::High).unwrap();
        model.set_rating(0, "Solution 1", RatingCell::Better).unwrap();
        model.set_rating(1, "Baseline", RatingCell::Worse).unwrap();
        model
    }

    fn handler(storage: Arc<InMemoryFileStorage>) -> ExportResultsHandler {
        ExportResultsHandler::new(storage)
            .with_exporter(Arc::new(CsvResultsExporter::new()))
            .with_exporter(Arc::new(SpreadsheetResultsExporter::new()))
            .with_exporter(Arc::new(UnavailableExporter))
    }

    #[tokio::test]
    async fn csv_export_writes_ranked_rows() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = handler(storage.clone());

        let result = handler
            .handle(ExportResultsCommand::new("Results.csv", ExportFormat::Csv), &scored_model())
            .await
            .unwrap();

        let text = String::from_utf8(storage.get(Path::new("Results.csv")).await.unwrap()).unwrap();
        assert_eq!(text, "Solution,Score\nSolution 1,3\nBaseline,-1\n");
        assert_eq!(result.document.filename, "Results.csv");
        assert_eq!(result.rows[0], RankedSolution::new("Solution 1", 3));
    }

    #[tokio::test]
    async fn spreadsheet_export_uses_stem_for_filename() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = handler(storage.clone()).with_title("Q3 pick");

        let result = handler
            .handle(
                ExportResultsCommand::new("out/choice.xml", ExportFormat::Spreadsheet),
                &scored_model(),
            )
            .await
            .unwrap();

        assert_eq!(result.document.filename, "choice.xml");
        let xml = String::from_utf8(result.document.content).unwrap();
        assert!(xml.contains("ss:Name=\"Q3 pick\""));
        assert!(storage.exists(Path::new("out/choice.xml")).await);
    }

    #[tokio::test]
    async fn xlsx_path_is_written_as_xml() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = handler(storage.clone());

        let result = handler
            .handle(
                ExportResultsCommand::new("Results.xlsx", ExportFormat::Spreadsheet),
                &scored_model(),
            )
            .await
            .unwrap();

        assert_eq!(result.path, PathBuf::from("Results.xml"));
        assert_eq!(result.document.filename, "Results.xml");
        assert!(!storage.exists(Path::new("Results.xlsx")).await);
        let written = storage.get(Path::new("Results.xml")).await.unwrap();
        assert!(written.starts_with(b"<?xml"));
    }

    #[test]
    fn output_path_keeps_matching_or_missing_extension() {
        assert_eq!(
            output_path(Path::new("r.CSV"), ExportFormat::Csv),
            PathBuf::from("r.CSV")
        );
        assert_eq!(
            output_path(Path::new("results"), ExportFormat::Markdown),
            PathBuf::from("results")
        );
        assert_eq!(
            output_path(Path::new("out/r.txt"), ExportFormat::Markdown),
            PathBuf::from("out/r.md")
        );
    }

    #[tokio::test]
    async fn unregistered_format_is_unsupported() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = handler(storage.clone());
        assert!(!handler.supports(ExportFormat::Markdown));

        let err = handler
            .handle(ExportResultsCommand::new("r.md", ExportFormat::Markdown), &scored_model())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnsupportedFormat);
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn exporter_failure_writes_nothing() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = handler(storage.clone());

        let err = handler
            .handle(ExportResultsCommand::new("r.pdf", ExportFormat::Pdf), &scored_model())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn write_failure_is_io_failure() {
        let handler = ExportResultsHandler::new(Arc::new(InMemoryFileStorage::failing_writes()))
            .with_exporter(Arc::new(CsvResultsExporter::new()));

        let err = handler
            .handle(ExportResultsCommand::new("r.csv", ExportFormat::Csv), &scored_model())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IoFailure);
    }
}
