//! Analysis Module - Pure domain services over the decision matrix.
//!
//! # Components
//!
//! - `PughAnalyzer` - Weighted score computation
//! - `ResultRanker` - Score-descending, name-ascending leaderboard
//! - `ResultsTable` - The ranked two-column dataset every export renders
//!
//! All functions are pure and stateless. Ranking is only computed when a
//! caller asks for it.

mod pugh_analyzer;
mod result_ranker;
mod results_table;

pub use pugh_analyzer::{PughAnalyzer, Scores};
pub use result_ranker::{RankedSolution, ResultRanker};
pub use results_table::{ResultsTable, DEFAULT_RESULTS_TITLE, RESULTS_HEADERS};
