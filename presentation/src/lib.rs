//! Presentation layer for workly
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, TargetArgs};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for};
