//! Results Table - Logical two-column dataset shared by every results export.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

use super::{RankedSolution, ResultRanker, Scores};

/// Column headers, in order.
pub const RESULTS_HEADERS: [&str; 2] = ["Solution", "Score"];

/// Default document title.
pub const DEFAULT_RESULTS_TITLE: &str = "Results";

/// Ranked `Solution`/`Score` rows ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsTable {
    pub title: String,
    pub rows: Vec<RankedSolution>,
    pub generated_at: Timestamp,
}

impl ResultsTable {
    /// Ranks the scores into a table.
    pub fn from_scores(title: impl Into<String>, scores: &Scores) -> Self {
        Self {
            title: title.into(),
            rows: ResultRanker::rank(scores),
            generated_at: Timestamp::now(),
        }
    }

    pub fn headers(&self) -> [&'static str; 2] {
        RESULTS_HEADERS
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as display strings, in rank order.
    pub fn string_rows(&self) -> impl Iterator<Item = [String; 2]> + '_ {
        self.rows
            .iter()
            .map(|row| [row.name.clone(), row.score.to_string()])
    }
}
