//! CLI module
//!
//! Command-line interface for exercising a controller over local data.
//!
//! # Commands
//!
//! - `walk` - Page through a JSON array file
//! - `config` - Show the effective controller configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
