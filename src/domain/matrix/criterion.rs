//! Criterion row: a weighted comparison axis with its rating column map.

use std::collections::BTreeMap;

use crate::domain::foundation::{CriterionId, Importance, RatingCell};

/// One criterion of the matrix.
///
/// Ratings are keyed by solution *name*, not by solution identity. Entries
/// for names no longer present in the matrix are kept but never read by
/// scoring.
///
/// Equality compares content only; two criteria with the same name, details,
/// importance and ratings are equal whatever their ids.
#[derive(Debug, Clone)]
pub struct Criterion {
    id: CriterionId,
    name: String,
    details: String,
    importance: Importance,
    states: BTreeMap<String, RatingCell>,
}

impl PartialEq for Criterion {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.details == other.details
            && self.importance == other.importance
            && self.states == other.states
    }
}

impl Eq for Criterion {}

impl Criterion {
    /// Creates a criterion with no ratings.
    pub fn new(name: impl Into<String>, importance: Importance) -> Self {
        Self {
            id: CriterionId::new(),
            name: name.into(),
            details: String::new(),
            importance,
            states: BTreeMap::new(),
        }
    }

    /// Sets the free-text details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Replaces the rating map.
    pub fn with_states(mut self, states: BTreeMap<String, RatingCell>) -> Self {
        self.states = states;
        self
    }

    pub fn id(&self) -> CriterionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    /// Every stored rating, including entries for unknown solution names.
    pub fn states(&self) -> &BTreeMap<String, RatingCell> {
        &self.states
    }

    /// Returns the rating for a solution name, `Unset` when absent.
    pub fn rating(&self, solution_name: &str) -> RatingCell {
        self.states.get(solution_name).copied().unwrap_or_default()
    }

    /// Weighted contribution of this criterion to a solution's score.
    pub fn weighted_score(&self, solution_name: &str) -> i32 {
        self.rating(solution_name).score() * self.importance.weight()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_details(&mut self, details: String) {
        self.details = details;
    }

    pub(crate) fn set_importance(&mut self, importance: Importance) {
        self.importance = importance;
    }

    pub(crate) fn set_rating(&mut self, solution_name: String, cell: RatingCell) {
        self.states.insert(solution_name, cell);
    }

    /// Moves (or copies, when `keep_source` is set) the rating stored under
    /// `from` to `to`. Does nothing when `from` has no entry.
    pub(crate) fn rekey_rating(&mut self, from: &str, to: &str, keep_source: bool) {
        let cell = if keep_source {
            self.states.get(from).copied()
        } else {
            self.states.remove(from)
        };
        if let Some(cell) = cell {
            self.states.insert(to.to_string(), cell);
        }
    }
}
