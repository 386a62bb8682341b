//! MatrixModel aggregate - criteria, solutions and the rating matrix.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::analysis::{PughAnalyzer, Scores};
use crate::domain::foundation::{Importance, RatingCell};

use super::{Criterion, EntityKind, MatrixError, Solution};

/// Default cap on criteria rows.
pub const DEFAULT_MAX_CRITERIA: usize = 11;
/// Default cap on solution columns.
pub const DEFAULT_MAX_SOLUTIONS: usize = 12;
/// Rows of each kind seeded into a new or reset model. Caps below this
/// trim the seed.
pub const SEED_ROWS: usize = 2;

const BASELINE_NAME: &str = "Baseline";
const BASELINE_DETAILS: &str = "If compared with existing: S, + or -";

/// What happens to a solution's ratings when it is renamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenamePolicy {
    /// Ratings stay under the old name and become unreachable.
    #[default]
    Orphan,
    /// Ratings follow the solution to its new name.
    CarryRatings,
}

/// Limits and policies applied by a [`MatrixModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixSettings {
    pub max_criteria: usize,
    pub max_solutions: usize,
    pub rename_policy: RenamePolicy,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self {
            max_criteria: DEFAULT_MAX_CRITERIA,
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            rename_policy: RenamePolicy::default(),
        }
    }
}

/// The decision matrix.
///
/// # Invariants
///
/// - `1 <= criteria.len() <= settings.max_criteria`
/// - `1 <= solutions.len() <= settings.max_solutions`
///
/// Every mutation either applies fully or returns an error and leaves the
/// model untouched. Rows are removed last-in-first-out only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixModel {
    settings: MatrixSettings,
    criteria: Vec<Criterion>,
    solutions: Vec<Solution>,
}

impl MatrixModel {
    /// Creates a model seeded with the default two criteria and two solutions,
    /// trimmed to the configured caps.
    pub fn new(settings: MatrixSettings) -> Self {
        Self {
            criteria: default_criteria(settings.max_criteria),
            solutions: default_solutions(settings.max_solutions),
            settings,
        }
    }

    /// Builds a model from existing rows, checking the count invariants.
    pub fn from_parts(
        settings: MatrixSettings,
        criteria: Vec<Criterion>,
        solutions: Vec<Solution>,
    ) -> Result<Self, MatrixError> {
        check_bounds(EntityKind::Criterion, criteria.len(), settings.max_criteria)?;
        check_bounds(EntityKind::Solution, solutions.len(), settings.max_solutions)?;
        Ok(Self {
            settings,
            criteria,
            solutions,
        })
    }

    pub fn settings(&self) -> &MatrixSettings {
        &self.settings
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn criterion(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    pub fn solution(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Finds the first solution with the given name.
    pub fn find_solution(&self, name: &str) -> Option<(usize, &Solution)> {
        self.solutions
            .iter()
            .enumerate()
            .find(|(_, s)| s.name() == name)
    }

    // ───────────────────────────────────────────────────────────────
    // Criteria
    // ───────────────────────────────────────────────────────────────

    /// Appends a criterion with an empty rating map. Returns its index.
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        importance: Importance,
    ) -> Result<usize, MatrixError> {
        if self.criteria.len() >= self.settings.max_criteria {
            warn!(max = self.settings.max_criteria, "criterion cap reached");
            return Err(MatrixError::capacity_exceeded(
                EntityKind::Criterion,
                self.settings.max_criteria,
            ));
        }
        let criterion = Criterion::new(name, importance);
        debug!(id = %criterion.id(), name = criterion.name(), "criterion added");
        self.criteria.push(criterion);
        Ok(self.criteria.len() - 1)
    }

    /// Removes the most recently added criterion.
    pub fn remove_criterion(&mut self) -> Result<Criterion, MatrixError> {
        if self.criteria.len() <= 1 {
            warn!("refusing to remove the only criterion");
            return Err(MatrixError::minimum_count(EntityKind::Criterion));
        }
        let removed = self
            .criteria
            .pop()
            .ok_or_else(|| MatrixError::minimum_count(EntityKind::Criterion))?;
        debug!(id = %removed.id(), name = removed.name(), "criterion removed");
        Ok(removed)
    }

    pub fn rename_criterion(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), MatrixError> {
        let criterion = self.criterion_mut(index)?;
        criterion.set_name(name.into());
        Ok(())
    }

    pub fn set_criterion_details(
        &mut self,
        index: usize,
        details: impl Into<String>,
    ) -> Result<(), MatrixError> {
        self.criterion_mut(index)?.set_details(details.into());
        Ok(())
    }

    pub fn set_importance(
        &mut self,
        index: usize,
        importance: Importance,
    ) -> Result<(), MatrixError> {
        self.criterion_mut(index)?.set_importance(importance);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Solutions
    // ───────────────────────────────────────────────────────────────

    /// Appends a solution. Returns its index.
    ///
    /// Names are not required to be unique or non-empty; solutions that
    /// share a name also share their ratings.
    pub fn add_solution(
        &mut self,
        name: impl Into<String>,
        details: impl Into<String>,
    ) -> Result<usize, MatrixError> {
        if self.solutions.len() >= self.settings.max_solutions {
            warn!(max = self.settings.max_solutions, "solution cap reached");
            return Err(MatrixError::capacity_exceeded(
                EntityKind::Solution,
                self.settings.max_solutions,
            ));
        }
        let solution = Solution::new(name, details);
        debug!(id = %solution.id(), name = solution.name(), "solution added");
        self.solutions.push(solution);
        Ok(self.solutions.len() - 1)
    }

    /// Removes the most recently added solution. Its ratings stay in the
    /// criteria maps.
    pub fn remove_solution(&mut self) -> Result<Solution, MatrixError> {
        if self.solutions.len() <= 1 {
            warn!("refusing to remove the only solution");
            return Err(MatrixError::minimum_count(EntityKind::Solution));
        }
        let removed = self
            .solutions
            .pop()
            .ok_or_else(|| MatrixError::minimum_count(EntityKind::Solution))?;
        debug!(id = %removed.id(), name = removed.name(), "solution removed");
        Ok(removed)
    }

    /// Renames a solution, applying the configured [`RenamePolicy`].
    pub fn rename_solution(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), MatrixError> {
        let len = self.solutions.len();
        let old_name = self
            .solutions
            .get(index)
            .map(|s| s.name().to_string())
            .ok_or_else(|| MatrixError::index_out_of_range(EntityKind::Solution, index, len))?;
        let new_name = name.into();
        if old_name == new_name {
            return Ok(());
        }

        if self.settings.rename_policy == RenamePolicy::CarryRatings {
            let shared = self
                .solutions
                .iter()
                .enumerate()
                .any(|(i, s)| i != index && s.name() == old_name);
            for criterion in &mut self.criteria {
                criterion.rekey_rating(&old_name, &new_name, shared);
            }
        }

        debug!(
            from = %old_name,
            to = %new_name,
            policy = ?self.settings.rename_policy,
            "solution renamed"
        );
        if let Some(solution) = self.solutions.get_mut(index) {
            solution.set_name(new_name);
        }
        Ok(())
    }

    pub fn set_solution_details(
        &mut self,
        index: usize,
        details: impl Into<String>,
    ) -> Result<(), MatrixError> {
        let len = self.solutions.len();
        self.solutions
            .get_mut(index)
            .ok_or_else(|| MatrixError::index_out_of_range(EntityKind::Solution, index, len))?
            .set_details(details.into());
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Ratings
    // ───────────────────────────────────────────────────────────────

    /// Stores a rating. Unknown solution names create a new entry.
    pub fn set_rating(
        &mut self,
        criterion_index: usize,
        solution_name: &str,
        cell: RatingCell,
    ) -> Result<(), MatrixError> {
        let known = self.find_solution(solution_name).is_some();
        let criterion = self.criterion_mut(criterion_index)?;
        if !known {
            debug!(solution = solution_name, "rating stored for unknown solution name");
        }
        criterion.set_rating(solution_name.to_string(), cell);
        Ok(())
    }

    /// Returns the stored rating, or `Unset` when absent or out of range.
    pub fn get_rating(&self, criterion_index: usize, solution_name: &str) -> RatingCell {
        self.criteria
            .get(criterion_index)
            .map(|c| c.rating(solution_name))
            .unwrap_or_default()
    }

    /// Advances a cell one step through its cycle and stores the result.
    pub fn advance_rating(
        &mut self,
        criterion_index: usize,
        solution_name: &str,
    ) -> Result<RatingCell, MatrixError> {
        let next = self.get_rating(criterion_index, solution_name).advance();
        self.set_rating(criterion_index, solution_name, next)?;
        Ok(next)
    }

    // ───────────────────────────────────────────────────────────────
    // Scores & lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Weighted score per solution name. See [`PughAnalyzer::compute_scores`].
    pub fn compute_scores(&self) -> Scores {
        PughAnalyzer::compute_scores(self)
    }

    /// Discards all rows and re-seeds the defaults. Settings are kept.
    pub fn reset(&mut self) {
        self.criteria = default_criteria(self.settings.max_criteria);
        self.solutions = default_solutions(self.settings.max_solutions);
        debug!("matrix reset to defaults");
    }

    fn criterion_mut(&mut self, index: usize) -> Result<&mut Criterion, MatrixError> {
        let len = self.criteria.len();
        self.criteria
            .get_mut(index)
            .ok_or_else(|| MatrixError::index_out_of_range(EntityKind::Criterion, index, len))
    }
}

impl Default for MatrixModel {
    fn default() -> Self {
        Self::new(MatrixSettings::default())
    }
}

/// Seed rows never exceed `cap`, and there is always at least one.
fn default_criteria(cap: usize) -> Vec<Criterion> {
    (1..=SEED_ROWS.min(cap.max(1)))
        .map(|n| Criterion::new(format!("Criteria {}", n), Importance::Low))
        .collect()
}

fn default_solutions(cap: usize) -> Vec<Solution> {
    let mut solutions = vec![Solution::new(BASELINE_NAME, BASELINE_DETAILS)];
    solutions.extend(
        (1..SEED_ROWS.min(cap.max(1))).map(|n| Solution::new(format!("Solution {}", n), "")),
    );
    solutions
}

fn check_bounds(kind: EntityKind, len: usize, max: usize) -> Result<(), MatrixError> {
    if len == 0 {
        return Err(MatrixError::minimum_count(kind));
    }
    if len > max {
        return Err(MatrixError::capacity_exceeded(kind, max));
    }
    Ok(())
}
