//! Strongly-typed identifier value objects.
//!
//! Ids live for one process only; they never reach the state file.

use std::fmt;
use uuid::Uuid;

/// Stable identifier for a criterion row, independent of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CriterionId(Uuid);

impl CriterionId {
    /// Creates a new random CriterionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CriterionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier for a solution column, independent of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolutionId(Uuid);

impl SolutionId {
    /// Creates a new random SolutionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SolutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
