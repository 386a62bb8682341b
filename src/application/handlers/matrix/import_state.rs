//! ImportStateHandler - Loads a saved matrix from a state file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::codec::StateCodec;
use crate::domain::foundation::DomainError;
use crate::domain::matrix::{MatrixModel, MatrixSettings};
use crate::ports::FileStorage;

/// Command to import a matrix from a state file.
#[derive(Debug, Clone)]
pub struct ImportStateCommand {
    pub path: PathBuf,
}

impl ImportStateCommand {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportStateResult {
    pub model: MatrixModel,
    pub path: PathBuf,
}

/// Handler for importing state files.
///
/// # Dependencies
///
/// - `FileStorage`: Read the state file
///
/// # Usage
///
/// ```rust,ignore
/// let handler = ImportStateHandler::new(storage, settings);
/// handler.import_into(ImportStateCommand::new("matrix.json"), &mut model).await?;
/// ```
pub struct ImportStateHandler {
    storage: Arc<dyn FileStorage>,
    settings: MatrixSettings,
}

impl ImportStateHandler {
    pub fn new(storage: Arc<dyn FileStorage>, settings: MatrixSettings) -> Self {
        Self { storage, settings }
    }

    /// Reads and decodes the file into a new model.
    pub async fn handle(&self, cmd: ImportStateCommand) -> Result<ImportStateResult, DomainError> {
        // 1. Read the whole file
        let text = self.storage.read_to_string(&cmd.path).await?;

        // 2. Decode against the configured caps
        let model = StateCodec::decode(&text, self.settings).map_err(|err| {
            tracing::warn!(path = %cmd.path.display(), error = %err, "state import rejected");
            DomainError::from(err).with_detail("path", cmd.path.display().to_string())
        })?;

        tracing::info!(
            path = %cmd.path.display(),
            criteria = model.criterion_count(),
            solutions = model.solution_count(),
            "state imported"
        );

        Ok(ImportStateResult {
            model,
            path: cmd.path,
        })
    }

    /// Imports into `target`, replacing it only once the new model is fully built.
    pub async fn import_into(
        &self,
        cmd: ImportStateCommand,
        target: &mut MatrixModel,
    ) -> Result<(), DomainError> {
        let result = self.handle(cmd).await?;
        *target = result.model;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFileStorage;
    use crate::domain::foundation::{ErrorCode, Importance, RatingCell};

    const VALID: &str = r#"{
    "criteria": [
        {"name": "Cost", "details": "", "importance": "High", "states": {"A": "+", "B": "-"}}
    ],
    "solutions": [
        {"name": "A", "details": ""},
        {"name": "B", "details": "runner-up"}
    ]
}"#;

    async fn handler_with(path: &str, contents: &str) -> ImportStateHandler {
        let storage = InMemoryFileStorage::new();
        storage.insert(path, contents).await;
        ImportStateHandler::new(Arc::new(storage), MatrixSettings::default())
    }

    #[tokio::test]
    async fn imports_valid_document() {
        let handler = handler_with("state.json", VALID).await;

        let result = handler.handle(ImportStateCommand::new("state.json")).await.unwrap();

        let model = result.model;
        assert_eq!(model.criterion_count(), 1);
        assert_eq!(model.solution_count(), 2);
        assert_eq!(model.criteria()[0].importance(), Importance::High);
        assert_eq!(model.get_rating(0, "B"), RatingCell::Worse);
        assert_eq!(model.solutions()[1].details(), "runner-up");
        assert_eq!(result.path, PathBuf::from("state.json"));
    }

    #[tokio::test]
    async fn missing_file_is_io_failure() {
        let handler = ImportStateHandler::new(
            Arc::new(InMemoryFileStorage::new()),
            MatrixSettings::default(),
        );

        let err = handler.handle(ImportStateCommand::new("absent.json")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IoFailure);
    }

    #[tokio::test]
    async fn malformed_document_leaves_target_untouched() {
        let handler = handler_with("bad.json", r#"{"solutions": []}"#).await;
        let mut model = MatrixModel::default();
        model.add_solution("Keep me", "").unwrap();
        let before = model.clone();

        let err = handler
            .import_into(ImportStateCommand::new("bad.json"), &mut model)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedDocument);
        assert_eq!(err.details.get("path"), Some(&"bad.json".to_string()));
        assert_eq!(model, before);
    }

    #[tokio::test]
    async fn import_into_replaces_on_success() {
        let handler = handler_with("state.json", VALID).await;
        let mut model = MatrixModel::default();

        handler
            .import_into(ImportStateCommand::new("state.json"), &mut model)
            .await
            .unwrap();

        assert_eq!(model.solutions()[0].name(), "A");
    }

    #[tokio::test]
    async fn oversized_document_exceeds_capacity() {
        let storage = InMemoryFileStorage::new();
        storage.insert("state.json", VALID).await;
        let settings = MatrixSettings {
            max_solutions: 1,
            ..MatrixSettings::default()
        };
        let handler = ImportStateHandler::new(Arc::new(storage), settings);

        let err = handler.handle(ImportStateCommand::new("state.json")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
    }
}
