// Rust guideline compliant 2026-08-20

//! Treescope CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, flag_summary, MatchRow, OutlineRow, OutputFormatter};
pub use terminal::should_use_color;
