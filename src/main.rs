//! CLI entrypoint for pugh-matrix
//!
//! Loads configuration, initialises logging and wires the adapters into the
//! command runner.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pugh_matrix::adapters::cli::{Cli, CliRunner};
use pugh_matrix::adapters::export::{
    CsvResultsExporter, MarkdownResultsExporter, PandocPdfExporter, SpreadsheetResultsExporter,
};
use pugh_matrix::adapters::storage::LocalFileStorage;
use pugh_matrix::application::ExportResultsHandler;
use pugh_matrix::config::{AppConfig, ExportConfig, LoggingConfig};
use pugh_matrix::ports::FileStorage;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[INVALID_CONFIGURATION] {}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("[INVALID_CONFIGURATION] {}", err);
        return ExitCode::from(2);
    }

    init_tracing(&config.logging);

    let storage: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new());
    let results = results_handler(storage.clone(), &config.export);
    let runner = CliRunner::new(storage, config.matrix.settings(), results);

    match runner.run(&cli.state_file, cli.command).await {
        Ok(output) => {
            if !output.is_empty() {
                print!("{}", output);
                if !output.ends_with('\n') {
                    println!();
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(code = %err.code, details = ?err.details, "command failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn results_handler(storage: Arc<dyn FileStorage>, export: &ExportConfig) -> ExportResultsHandler {
    let mut pdf = PandocPdfExporter::new().with_timeout(export.pdf_timeout_secs);
    if let Some(path) = &export.pandoc_path {
        pdf = pdf.with_pandoc_path(path.clone());
    }

    ExportResultsHandler::new(storage)
        .with_title(export.results_title.clone())
        .with_exporter(Arc::new(CsvResultsExporter::new()))
        .with_exporter(Arc::new(SpreadsheetResultsExporter::new()))
        .with_exporter(Arc::new(MarkdownResultsExporter::new()))
        .with_exporter(Arc::new(pdf))
}
