//! Matrix configuration

use serde::Deserialize;

use crate::domain::matrix::{
    MatrixSettings, RenamePolicy, DEFAULT_MAX_CRITERIA, DEFAULT_MAX_SOLUTIONS, SEED_ROWS,
};

use super::error::ValidationError;

/// Row caps and rename behaviour for the matrix
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    /// Maximum number of criteria rows
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Maximum number of solution rows
    #[serde(default = "default_max_solutions")]
    pub max_solutions: usize,

    /// What happens to ratings when a solution is renamed
    #[serde(default)]
    pub rename_policy: RenamePolicy,
}

impl MatrixConfig {
    /// Settings handed to every model built by the application
    pub fn settings(&self) -> MatrixSettings {
        MatrixSettings {
            max_criteria: self.max_criteria,
            max_solutions: self.max_solutions,
            rename_policy: self.rename_policy,
        }
    }

    /// Validate matrix configuration
    ///
    /// Caps must leave room for the rows a fresh matrix is seeded with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_criteria < SEED_ROWS {
            return Err(ValidationError::InvalidCriteriaCap);
        }
        if self.max_solutions < SEED_ROWS {
            return Err(ValidationError::InvalidSolutionCap);
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            max_criteria: default_max_criteria(),
            max_solutions: default_max_solutions(),
            rename_policy: RenamePolicy::default(),
        }
    }
}

fn default_max_criteria() -> usize {
    DEFAULT_MAX_CRITERIA
}

fn default_max_solutions() -> usize {
    DEFAULT_MAX_SOLUTIONS
}
