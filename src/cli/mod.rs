//! Command-line interface for tomato.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigCommands, LogLevel, OutputFormat};
