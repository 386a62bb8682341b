//! Codec Module - Import/export of the matrix state.
//!
//! The interchange document has exactly two top-level lists, `criteria` and
//! `solutions`. Ratings travel as their one-character symbols. Decoding is
//! strict about the top-level shape and lenient about individual fields.

mod document;
mod errors;
mod state_codec;

pub use document::{CriterionRecord, SolutionRecord, StateDocument};
pub use errors::CodecError;
pub use state_codec::StateCodec;
