//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cursor-pager CLI
#[derive(Parser, Debug)]
#[command(name = "cursor-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Controller configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Page through a JSON array file, printing the state after each fetch
    Walk {
        /// JSON file holding an array of items
        #[arg(short, long)]
        input: PathBuf,

        /// Items per page (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Stop after this many pages (default: until the last page)
        #[arg(short, long)]
        pages: Option<usize>,

        /// Refresh the current position once the walk is done
        #[arg(long)]
        refresh: bool,
    },

    /// Print the effective controller configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one state per line)
    Json,
    /// Human-readable output
    Pretty,
}
