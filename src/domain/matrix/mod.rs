//! Matrix Module - The decision matrix aggregate.
//!
//! # Components
//!
//! - `Criterion` - Weighted row holding ratings keyed by solution name
//! - `Solution` - Candidate column
//! - `MatrixModel` - Ordered criteria and solutions with count invariants
//! - `MatrixError` - Rejected mutations (capacity, minimum count, index)
//!
//! The model never depends on how it is rendered. Presentation code reads it
//! through the accessors and changes it only through the mutation methods.

mod criterion;
mod errors;
mod model;
mod solution;

pub use criterion::Criterion;
pub use errors::{EntityKind, MatrixError};
pub use model::{
    MatrixModel, MatrixSettings, RenamePolicy, DEFAULT_MAX_CRITERIA, DEFAULT_MAX_SOLUTIONS,
    SEED_ROWS,
};
pub use solution::Solution;
