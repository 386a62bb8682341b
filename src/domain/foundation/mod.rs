//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision matrix.

mod errors;
mod ids;
mod importance;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, SolutionId};
pub use importance::Importance;
pub use rating::RatingCell;
pub use timestamp::Timestamp;
