//! Pugh Analyzer - Weighted score computation.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::matrix::MatrixModel;

/// Total weighted score per solution name.
///
/// Keyed by name in ascending order, so iteration never depends on how the
/// scores were accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scores(BTreeMap<String, i32>);

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds to a solution's total, creating it at zero first.
    pub fn add(&mut self, name: impl Into<String>, points: i32) {
        *self.0.entry(name.into()).or_insert(0) += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Scores {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut scores = Scores::new();
        for (name, score) in iter {
            scores.add(name, score);
        }
        scores
    }
}

/// Pugh matrix analysis functions.
pub struct PughAnalyzer;

impl PughAnalyzer {
    /// Computes weighted Pugh scores for each solution.
    ///
    /// # Algorithm
    /// For each solution: score = Σ(rating[criterion].score() × weight[criterion])
    ///
    /// # Edge Cases
    /// - Missing cells: Treated as `Unset` (0)
    /// - Ratings under names no solution carries: Ignored
    /// - Solutions sharing a name: One entry, contributions summed
    pub fn compute_scores(model: &MatrixModel) -> Scores {
        let mut scores = Scores::new();

        for solution in model.solutions() {
            scores.add(solution.name(), 0);
        }

        for criterion in model.criteria() {
            for solution in model.solutions() {
                scores.add(solution.name(), criterion.weighted_score(solution.name()));
            }
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Importance, RatingCell};
    use crate::domain::matrix::{Criterion, MatrixSettings, Solution};
    use std::collections::BTreeMap;

    fn model(criteria: Vec<Criterion>, solutions: Vec<&str>) -> MatrixModel {
        let solutions = solutions.into_iter().map(|n| Solution::new(n, "")).collect();
        MatrixModel::from_parts(MatrixSettings::default(), criteria, solutions).unwrap()
    }

    fn states(pairs: &[(&str, RatingCell)]) -> BTreeMap<String, RatingCell> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn unrated_solutions_score_zero() {
        let m = model(vec![Criterion::new("Cost", Importance::High)], vec!["A", "B"]);
        let scores = PughAnalyzer::compute_scores(&m);
        assert_eq!(scores.get("A"), Some(0));
        assert_eq!(scores.get("B"), Some(0));
    }

    #[test]
    fn weights_multiply_ratings() {
        let m = model(
            vec![
                Criterion::new("Cost", Importance::Low)
                    .with_states(states(&[("A", RatingCell::Better)])),
                Criterion::new("Quality", Importance::Medium)
                    .with_states(states(&[("A", RatingCell::Better)])),
                Criterion::new("Risk", Importance::High)
                    .with_states(states(&[("A", RatingCell::Worse)])),
            ],
            vec!["A"],
        );
        // 1*1 + 1*2 - 1*3
        assert_eq!(PughAnalyzer::compute_scores(&m).get("A"), Some(0));
    }

    #[test]
    fn same_and_unset_contribute_nothing() {
        let m = model(
            vec![Criterion::new("Cost", Importance::High)
                .with_states(states(&[("A", RatingCell::Same), ("B", RatingCell::Unset)]))],
            vec!["A", "B"],
        );
        let scores = PughAnalyzer::compute_scores(&m);
        assert_eq!(scores.get("A"), Some(0));
        assert_eq!(scores.get("B"), Some(0));
    }

    #[test]
    fn stale_entries_are_ignored() {
        let m = model(
            vec![Criterion::new("Cost", Importance::High)
                .with_states(states(&[("Removed", RatingCell::Better)]))],
            vec!["A"],
        );
        let scores = PughAnalyzer::compute_scores(&m);
        assert_eq!(scores.len(), 1);
        assert!(!scores.contains("Removed"));
    }

    #[test]
    fn duplicate_names_share_one_summed_entry() {
        let m = model(
            vec![Criterion::new("Cost", Importance::Medium)
                .with_states(states(&[("Twin", RatingCell::Better)]))],
            vec!["Twin", "Twin"],
        );
        let scores = PughAnalyzer::compute_scores(&m);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("Twin"), Some(4));
    }

    #[test]
    fn result_is_independent_of_rating_insertion_order() {
        let forward = Criterion::new("Cost", Importance::Low)
            .with_states(states(&[("A", RatingCell::Better), ("B", RatingCell::Worse)]));
        let backward = Criterion::new("Cost", Importance::Low)
            .with_states(states(&[("B", RatingCell::Worse), ("A", RatingCell::Better)]));

        let a = PughAnalyzer::compute_scores(&model(vec![forward], vec!["A", "B"]));
        let b = PughAnalyzer::compute_scores(&model(vec![backward], vec!["B", "A"]));
        assert_eq!(a, b);
    }

    #[test]
    fn scores_collect_and_iterate_in_name_order() {
        let scores: Scores = vec![("b", 2), ("a", 1), ("b", 3)].into_iter().collect();
        let collected: Vec<(&str, i32)> = scores.iter().collect();
        assert_eq!(collected, vec![("a", 1), ("b", 5)]);
    }
}
