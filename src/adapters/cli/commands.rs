//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::foundation::{Importance, RatingCell};
use crate::ports::ExportFormat;

/// Which row kind a details edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RowKind {
    Criterion,
    Solution,
}

/// CLI arguments for pugh-matrix
#[derive(Parser, Debug)]
#[command(name = "pugh-matrix")]
#[command(author, version, about = "Weighted Pugh decision matrix")]
#[command(long_about = r#"
Scores candidate solutions against weighted criteria.

Each cell compares a solution with the baseline: + (better), - (worse),
S (same) or blank. A criterion's importance (Low/Medium/High = 1/2/3)
multiplies its ratings; a solution's score is the weighted sum.

The matrix lives in STATE_FILE. Every editing command loads it (or the
default matrix when the file does not exist yet), applies one change and
saves it back. Row indices start at 0.

Example:
  pugh-matrix choice.json add-solution "Rewrite" --details "from scratch"
  pugh-matrix choice.json rate 0 Rewrite +
  pugh-matrix choice.json score
  pugh-matrix choice.json export-results Results.csv
"#)]
pub struct Cli {
    /// Matrix state file (JSON)
    #[arg(value_name = "STATE_FILE")]
    pub state_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the default matrix to the state file
    Init {
        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Print the matrix
    Show,

    /// Append a criterion
    AddCriterion {
        name: String,
        #[arg(short, long, default_value = "low")]
        importance: Importance,
        #[arg(short, long, default_value = "")]
        details: String,
    },

    /// Remove the most recently added criterion
    RemoveCriterion,

    /// Append a solution
    AddSolution {
        name: String,
        #[arg(short, long, default_value = "")]
        details: String,
    },

    /// Remove the most recently added solution
    RemoveSolution,

    /// Rename the criterion at INDEX
    RenameCriterion { index: usize, name: String },

    /// Rename the solution at INDEX
    RenameSolution { index: usize, name: String },

    /// Set the importance of the criterion at INDEX
    SetImportance { index: usize, importance: Importance },

    /// Set the details text of a criterion or solution
    SetDetails {
        #[arg(value_enum)]
        kind: RowKind,
        index: usize,
        details: String,
    },

    /// Rate SOLUTION against the criterion at CRITERION (+, -, S, better, worse, same, unset)
    Rate {
        criterion: usize,
        solution: String,
        #[arg(allow_hyphen_values = true)]
        rating: RatingCell,
    },

    /// Advance a cell one step: blank -> + -> - -> S -> blank
    Advance { criterion: usize, solution: String },

    /// Print the ranked scores
    Score,

    /// Write the ranked results to OUTPUT
    ExportResults {
        output: PathBuf,
        /// csv, spreadsheet, markdown or pdf (inferred from OUTPUT's extension when omitted)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Replace the matrix with the defaults
    Reset,
}
