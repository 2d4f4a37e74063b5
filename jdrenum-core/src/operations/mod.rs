//! High-level operations that correspond to CLI commands
//!
//! These modules run the renumbering phases in order and return structured
//! results, separated from CLI concerns like argument parsing and output
//! formatting.

pub mod renumber;

pub use renumber::renumber_operation;
