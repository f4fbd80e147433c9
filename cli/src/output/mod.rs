//! CLI-specific output implementations
//!
//! This module contains concrete implementations of the output abstraction
//! for command-line interfaces, including live progress lines and the final
//! results table.

pub mod handler;
pub mod table;

pub use handler::TableOutputHandler;
pub use table::ResultsTable;
