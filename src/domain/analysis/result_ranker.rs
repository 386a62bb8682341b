//! Result Ranker - Sorted leaderboard from computed scores.

use serde::Serialize;
use std::cmp::Ordering;

use super::Scores;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSolution {
    pub name: String,
    pub score: i32,
}

impl RankedSolution {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Orders scores for display and export.
pub struct ResultRanker;

impl ResultRanker {
    /// Sorts by score descending, then by name ascending.
    ///
    /// Empty input yields an empty leaderboard.
    pub fn rank(scores: &Scores) -> Vec<RankedSolution> {
        let mut ranked: Vec<RankedSolution> = scores
            .iter()
            .map(|(name, score)| RankedSolution::new(name, score))
            .collect();
        ranked.sort_by(Self::compare);
        ranked
    }

    fn compare(a: &RankedSolution, b: &RankedSolution) -> Ordering {
        b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(ranked: &[RankedSolution]) -> Vec<&str> {
        ranked.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_scores_rank_empty() {
        assert!(ResultRanker::rank(&Scores::new()).is_empty());
    }

    #[test]
    fn higher_score_ranks_first() {
        let scores: Scores = vec![("A", -3), ("B", 1)].into_iter().collect();
        let ranked = ResultRanker::rank(&scores);
        assert_eq!(
            ranked,
            vec![RankedSolution::new("B", 1), RankedSolution::new("A", -3)]
        );
    }

    #[test]
    fn ties_break_by_ascending_name() {
        let scores: Scores = vec![("Zeta", 2), ("Alpha", 2), ("Mid", 5), ("Beta", 2)]
            .into_iter()
            .collect();
        let ranked = ResultRanker::rank(&scores);
        assert_eq!(names(&ranked), vec!["Mid", "Alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn name_comparison_is_lexicographic() {
        let scores: Scores = vec![("b", 0), ("B", 0), ("", 0)].into_iter().collect();
        let ranked = ResultRanker::rank(&scores);
        assert_eq!(names(&ranked), vec!["", "B", "b"]);
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_complete(
            entries in prop::collection::btree_map("[a-z]{0,4}", -30i32..30, 0..12)
        ) {
            let scores: Scores = entries.clone().into_iter().collect();
            let ranked = ResultRanker::rank(&scores);

            prop_assert_eq!(ranked.len(), entries.len());
            for pair in ranked.windows(2) {
                let ordered = pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].name < pair[1].name);
                prop_assert!(ordered);
            }
        }
    }
}
