//! ExportStateHandler - Saves the matrix to a state file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::codec::StateCodec;
use crate::domain::foundation::DomainError;
use crate::domain::matrix::MatrixModel;
use crate::ports::FileStorage;

/// Command to export the matrix to a state file.
#[derive(Debug, Clone)]
pub struct ExportStateCommand {
    pub path: PathBuf,
}

impl ExportStateCommand {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportStateResult {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Handler for exporting state files.
pub struct ExportStateHandler {
    storage: Arc<dyn FileStorage>,
}

impl ExportStateHandler {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: ExportStateCommand,
        model: &MatrixModel,
    ) -> Result<ExportStateResult, DomainError> {
        let text = StateCodec::encode(model)?;
        self.storage.write(&cmd.path, text.as_bytes()).await?;

        tracing::info!(path = %cmd.path.display(), bytes = text.len(), "state exported");

        Ok(ExportStateResult {
            path: cmd.path,
            bytes_written: text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFileStorage;
    use crate::domain::foundation::{ErrorCode, RatingCell};
    use crate::domain::matrix::MatrixSettings;
    use std::path::Path;

    #[tokio::test]
    async fn writes_four_space_indented_json() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = ExportStateHandler::new(storage.clone());
        let mut model = MatrixModel::default();
        model.set_rating(0, "Solution 1", RatingCell::Better).unwrap();

        let result = handler
            .handle(ExportStateCommand::new("out/state.json"), &model)
            .await
            .unwrap();

        let bytes = storage.get(Path::new("out/state.json")).await.unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(result.bytes_written, text.len());
        assert!(text.contains("\n    \"criteria\": ["));
        assert!(text.contains("\"Solution 1\": \"+\""));
    }

    #[tokio::test]
    async fn exported_file_decodes_to_same_document() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let handler = ExportStateHandler::new(storage.clone());
        let mut model = MatrixModel::default();
        model.set_rating(1, "Baseline", RatingCell::Same).unwrap();

        handler
            .handle(ExportStateCommand::new("state.json"), &model)
            .await
            .unwrap();

        let text = String::from_utf8(storage.get(Path::new("state.json")).await.unwrap()).unwrap();
        let decoded = StateCodec::decode(&text, MatrixSettings::default()).unwrap();
        assert_eq!(StateCodec::export_state(&decoded), StateCodec::export_state(&model));
    }

    #[tokio::test]
    async fn write_failure_is_io_failure() {
        let handler = ExportStateHandler::new(Arc::new(InMemoryFileStorage::failing_writes()));

        let err = handler
            .handle(ExportStateCommand::new("state.json"), &MatrixModel::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IoFailure);
    }
}
