//! Command-line adapter
//!
//! Parses arguments with `clap` and drives the application handlers. The
//! binary in `main.rs` only wires configuration, logging and this runner.

mod commands;
mod runner;

pub use commands::{Cli, Command, RowKind};
pub use runner::{render_matrix, render_scores, CliRunner};
