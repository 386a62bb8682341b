//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `matrix` - The decision matrix aggregate and its invariants
//! - `analysis` - Pure scoring and ranking services
//! - `codec` - Interchange document import/export

pub mod analysis;
pub mod codec;
pub mod foundation;
pub mod matrix;
