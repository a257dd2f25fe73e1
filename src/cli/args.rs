//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DATA_PATH, DEFAULT_PARALLEL_THRESHOLD, EngineConfig};

/// simple-search - search the lines of a text file with ALL, ANY or NONE matching
#[derive(Parser, Debug, Clone)]
#[command(name = "simple-search")]
#[command(about = "Search the lines of a text file interactively")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SimpleSearchArgs {
    /// Data file with one record per line
    #[arg(long = "data", value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for search results
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Build the index with multiple threads on large inputs
    #[arg(long)]
    pub parallel: bool,

    /// Minimum number of lines before the index is built in parallel
    #[arg(long, value_name = "LINES", default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    pub parallel_threshold: usize,
}

impl SimpleSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Engine configuration derived from the flags.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_data_path(self.data.clone())
            .with_parallel(self.parallel)
            .with_parallel_threshold(self.parallel_threshold)
    }
}

/// Output formats for search results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
