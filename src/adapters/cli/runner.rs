//! CLI runner - drives the matrix through the application handlers.
//!
//! Each invocation is one load / change / save cycle. The state file is
//! rewritten only after the change succeeds.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use crate::application::{
    ExportResultsCommand, ExportResultsHandler, ExportStateCommand, ExportStateHandler,
    ImportStateCommand, ImportStateHandler,
};
use crate::domain::analysis::ResultRanker;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::matrix::{MatrixError, MatrixModel, MatrixSettings};
use crate::ports::{ExportFormat, FileStorage};

use super::commands::{Command, RowKind};

/// Executes CLI commands against a state file.
pub struct CliRunner {
    storage: Arc<dyn FileStorage>,
    settings: MatrixSettings,
    import_handler: ImportStateHandler,
    export_state_handler: ExportStateHandler,
    export_results_handler: ExportResultsHandler,
}

impl CliRunner {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        settings: MatrixSettings,
        export_results_handler: ExportResultsHandler,
    ) -> Self {
        Self {
            import_handler: ImportStateHandler::new(storage.clone(), settings),
            export_state_handler: ExportStateHandler::new(storage.clone()),
            storage,
            settings,
            export_results_handler,
        }
    }

    /// Runs one command and returns the text to print.
    pub async fn run(&self, state_file: &Path, command: Command) -> Result<String, DomainError> {
        match command {
            Command::Init { force } => self.init(state_file, force).await,
            Command::Show => {
                let model = self.load(state_file).await?;
                Ok(render_matrix(&model))
            }
            Command::Score => {
                let model = self.load(state_file).await?;
                Ok(render_scores(&model))
            }
            Command::ExportResults { output, format } => {
                let model = self.load(state_file).await?;
                let format = match format {
                    Some(format) => format,
                    None => format_from_extension(&output)?,
                };
                let result = self
                    .export_results_handler
                    .handle(ExportResultsCommand::new(output, format), &model)
                    .await?;
                Ok(format!(
                    "Wrote {} results ({} rows) to {}",
                    result.document.format,
                    result.rows.len(),
                    result.path.display()
                ))
            }
            mutation => {
                let mut model = self.load(state_file).await?;
                let message = apply(&mut model, &mutation)?;
                self.save(state_file, &model).await?;
                Ok(message)
            }
        }
    }

    async fn init(&self, state_file: &Path, force: bool) -> Result<String, DomainError> {
        if !force && self.storage.exists(state_file).await {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!(
                    "{} already exists; pass --force to overwrite",
                    state_file.display()
                ),
            ));
        }
        let model = MatrixModel::new(self.settings);
        self.save(state_file, &model).await?;
        Ok(format!("Initialised {}", state_file.display()))
    }

    /// Loads the state file, or the default matrix when it does not exist yet.
    async fn load(&self, state_file: &Path) -> Result<MatrixModel, DomainError> {
        if !self.storage.exists(state_file).await {
            tracing::info!(path = %state_file.display(), "no state file, starting from defaults");
            return Ok(MatrixModel::new(self.settings));
        }
        let mut model = MatrixModel::new(self.settings);
        self.import_handler
            .import_into(ImportStateCommand::new(state_file), &mut model)
            .await?;
        Ok(model)
    }

    async fn save(&self, state_file: &Path, model: &MatrixModel) -> Result<(), DomainError> {
        self.export_state_handler
            .handle(ExportStateCommand::new(state_file), model)
            .await?;
        Ok(())
    }
}

/// Applies one editing command to the model.
fn apply(model: &mut MatrixModel, command: &Command) -> Result<String, MatrixError> {
    let message = match command {
        Command::AddCriterion {
            name,
            importance,
            details,
        } => {
            let index = model.add_criterion(name.clone(), *importance)?;
            model.set_criterion_details(index, details.clone())?;
            format!("Added criterion {} at index {}", name, index)
        }
        Command::RemoveCriterion => {
            let removed = model.remove_criterion()?;
            format!("Removed criterion {}", removed.name())
        }
        Command::AddSolution { name, details } => {
            let index = model.add_solution(name.clone(), details.clone())?;
            format!("Added solution {} at index {}", name, index)
        }
        Command::RemoveSolution => {
            let removed = model.remove_solution()?;
            format!("Removed solution {}", removed.name())
        }
        Command::RenameCriterion { index, name } => {
            model.rename_criterion(*index, name.clone())?;
            format!("Criterion {} renamed to {}", index, name)
        }
        Command::RenameSolution { index, name } => {
            model.rename_solution(*index, name.clone())?;
            format!("Solution {} renamed to {}", index, name)
        }
        Command::SetImportance { index, importance } => {
            model.set_importance(*index, *importance)?;
            format!("Criterion {} importance set to {}", index, importance.label())
        }
        Command::SetDetails {
            kind,
            index,
            details,
        } => {
            match kind {
                RowKind::Criterion => model.set_criterion_details(*index, details.clone())?,
                RowKind::Solution => model.set_solution_details(*index, details.clone())?,
            }
            "Details updated".to_string()
        }
        Command::Rate {
            criterion,
            solution,
            rating,
        } => {
            model.set_rating(*criterion, solution, *rating)?;
            format!("{} / {} = {}", criterion, solution, rating.label())
        }
        Command::Advance {
            criterion,
            solution,
        } => {
            let cell = model.advance_rating(*criterion, solution)?;
            format!("{} / {} = {}", criterion, solution, cell.label())
        }
        Command::Reset => {
            model.reset();
            "Matrix reset to defaults".to_string()
        }
        Command::Init { .. } | Command::Show | Command::Score | Command::ExportResults { .. } => {
            String::new()
        }
    };
    Ok(message)
}

fn format_from_extension(path: &Path) -> Result<ExportFormat, DomainError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnsupportedFormat,
                format!("cannot infer a format from {}; pass --format", path.display()),
            )
        })?;
    Ok(extension.parse::<ExportFormat>()?)
}

/// Text view of the matrix: solutions, then one line per criterion.
pub fn render_matrix(model: &MatrixModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Solutions:");
    for (i, solution) in model.solutions().iter().enumerate() {
        if solution.details().is_empty() {
            let _ = writeln!(out, "  {:>2}  {}", i, solution.name());
        } else {
            let _ = writeln!(out, "  {:>2}  {}  ({})", i, solution.name(), solution.details());
        }
    }

    let _ = writeln!(out, "Criteria:");
    for (i, criterion) in model.criteria().iter().enumerate() {
        let cells: Vec<String> = model
            .solutions()
            .iter()
            .map(|s| format!("[{}]", criterion.rating(s.name()).symbol()))
            .collect();
        let _ = writeln!(
            out,
            "  {:>2}  {} ({})  {}",
            i,
            criterion.name(),
            criterion.importance().label(),
            cells.join(" ")
        );
    }
    out
}

/// Ranked leaderboard, best first.
pub fn render_scores(model: &MatrixModel) -> String {
    let mut out = String::new();
    for (rank, row) in ResultRanker::rank(&model.compute_scores()).iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}  {}", rank + 1, row.name, row.score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::CsvResultsExporter;
    use crate::adapters::storage::InMemoryFileStorage;
    use crate::domain::codec::StateCodec;
    use crate::domain::foundation::{Importance, RatingCell};
    use std::path::PathBuf;

    fn runner(storage: Arc<InMemoryFileStorage>) -> CliRunner {
        let results = ExportResultsHandler::new(storage.clone())
            .with_exporter(Arc::new(CsvResultsExporter::new()));
        CliRunner::new(storage, MatrixSettings::default(), results)
    }

    async fn saved_model(storage: &InMemoryFileStorage, path: &str) -> MatrixModel {
        let bytes = storage.get(Path::new(path)).await.unwrap();
        StateCodec::decode(&String::from_utf8(bytes).unwrap(), MatrixSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn mutations_are_persisted() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());
        let state = Path::new("m.json");

        runner
            .run(
                state,
                Command::AddCriterion {
                    name: "Cost".to_string(),
                    importance: Importance::High,
                    details: "total".to_string(),
                },
            )
            .await
            .unwrap();
        runner
            .run(
                state,
                Command::Rate {
                    criterion: 2,
                    solution: "Solution 1".to_string(),
                    rating: RatingCell::Better,
                },
            )
            .await
            .unwrap();

        let model = saved_model(&storage, "m.json").await;
        assert_eq!(model.criterion_count(), 3);
        assert_eq!(model.criteria()[2].details(), "total");
        assert_eq!(model.get_rating(2, "Solution 1"), RatingCell::Better);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());
        let state = Path::new("m.json");
        runner.run(state, Command::RemoveSolution).await.unwrap();
        let before = storage.get(state).await.unwrap();

        let err = runner.run(state, Command::RemoveSolution).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::MinimumCountViolation);
        assert_eq!(storage.get(state).await.unwrap(), before);
        assert_eq!(saved_model(&storage, "m.json").await.solution_count(), 1);
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite_without_force() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());
        let state = Path::new("m.json");

        runner.run(state, Command::Init { force: false }).await.unwrap();
        let err = runner.run(state, Command::Init { force: false }).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        assert!(runner.run(state, Command::Init { force: true }).await.is_ok());
    }

    #[tokio::test]
    async fn score_prints_ranked_leaderboard() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());
        let state = Path::new("m.json");
        runner
            .run(
                state,
                Command::Advance {
                    criterion: 0,
                    solution: "Solution 1".to_string(),
                },
            )
            .await
            .unwrap();

        let out = runner.run(state, Command::Score).await.unwrap();
        assert_eq!(out, " 1. Solution 1  1\n 2. Baseline  0\n");
    }

    #[tokio::test]
    async fn show_lists_rows_and_symbols() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());

        let out = runner.run(Path::new("m.json"), Command::Show).await.unwrap();
        assert!(out.contains("Baseline  (If compared with existing: S, + or -)"));
        assert!(out.contains("Criteria 1 (Low)  [ ] [ ]"));
    }

    #[tokio::test]
    async fn export_infers_format_from_extension() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());

        let out = runner
            .run(
                Path::new("m.json"),
                Command::ExportResults {
                    output: PathBuf::from("Results.csv"),
                    format: None,
                },
            )
            .await
            .unwrap();

        assert!(out.contains("csv"));
        assert!(storage.exists(Path::new("Results.csv")).await);
    }

    #[tokio::test]
    async fn export_without_extension_needs_format() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage);

        let err = runner
            .run(
                Path::new("m.json"),
                Command::ExportResults {
                    output: PathBuf::from("Results"),
                    format: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedFormat);
    }

    #[tokio::test]
    async fn xlsx_extension_is_not_inferred() {
        let storage = Arc::new(InMemoryFileStorage::new());
        let runner = runner(storage.clone());

        let err = runner
            .run(
                Path::new("m.json"),
                Command::ExportResults {
                    output: PathBuf::from("Results.xlsx"),
                    format: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnsupportedFormat);
        assert_eq!(storage.file_count().await, 0);
    }
}
