//! Pugh Matrix - Weighted decision matrix
//!
//! Candidate solutions are rated against weighted criteria on a
//! better / worse / same scale relative to a baseline; the weighted sums
//! rank the solutions. The matrix is saved as a JSON state file and the
//! ranking can be exported as CSV, spreadsheet, Markdown or PDF.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
