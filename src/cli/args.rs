//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate a symbol, benchmark and test inventory from a codebase
#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(about = "Generate a symbol, benchmark and test inventory from a codebase")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the project and write the inventory report
    Generate {
        /// Project root containing the source, benchmark and test directories
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Report file (defaults to inventory.md in the project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path (defaults to inventory.toml in the project root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (markdown, json)
        #[arg(long)]
        format: Option<String>,

        /// Project name used in the report title
        #[arg(long)]
        title: Option<String>,

        /// Treat missing scan roots as empty instead of failing
        #[arg(long)]
        allow_missing_roots: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
