//! CLI argument definitions using clap.
//!
//! `ucd` has a single command: scan the source directory and list unused
//! components. `--ignore` and `--extensions` override the config file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list of unused components
    #[default]
    Text,
    /// All records, unused records and per-file errors as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "ucd",
    author,
    version,
    about = "Detect unused React components in your project",
    long_about = None
)]
pub struct Arguments {
    /// Source directory to scan (overrides config file)
    #[arg(long, env = "UCD_SRC_PATH")]
    pub src_path: Option<PathBuf>,

    /// Paths to ignore (overrides config file)
    #[arg(short, long, num_args = 1.., value_name = "PATHS")]
    pub ignore: Option<Vec<String>>,

    /// File extensions to scan (overrides config file)
    #[arg(short, long, num_args = 1.., value_name = "EXTENSIONS")]
    pub extensions: Option<Vec<String>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
