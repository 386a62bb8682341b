//! Matrix-specific error types.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Which row/column collection an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Criterion,
    Solution,
}

impl EntityKind {
    /// Noun used for rows of this kind in user notices.
    pub fn row_label(&self) -> &'static str {
        match self {
            EntityKind::Criterion => "criteria",
            EntityKind::Solution => "solution",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Criterion => write!(f, "criterion"),
            EntityKind::Solution => write!(f, "solution"),
        }
    }
}

/// Rejected matrix mutations. The model is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("A maximum of {max} {} rows are allowed", .kind.row_label())]
    CapacityExceeded { kind: EntityKind, max: usize },

    #[error("At least one {kind} must be present")]
    MinimumCountViolation { kind: EntityKind },

    #[error("No {kind} at index {index} (have {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },
}

impl MatrixError {
    pub fn capacity_exceeded(kind: EntityKind, max: usize) -> Self {
        MatrixError::CapacityExceeded { kind, max }
    }

    pub fn minimum_count(kind: EntityKind) -> Self {
        MatrixError::MinimumCountViolation { kind }
    }

    pub fn index_out_of_range(kind: EntityKind, index: usize, len: usize) -> Self {
        MatrixError::IndexOutOfRange { kind, index, len }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MatrixError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            MatrixError::MinimumCountViolation { .. } => ErrorCode::MinimumCountViolation,
            MatrixError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            MatrixError::CapacityExceeded { kind, .. }
            | MatrixError::MinimumCountViolation { kind }
            | MatrixError::IndexOutOfRange { kind, .. } => *kind,
        }
    }
}

impl From<MatrixError> for DomainError {
    fn from(err: MatrixError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("entity", err.kind().to_string())
    }
}
