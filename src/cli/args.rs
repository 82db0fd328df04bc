//! Command-line argument parsing for SWAPI Fetcher
//!
//! This module defines the CLI structure using clap derive macros: global
//! logging and connection flags plus one subcommand per roster query.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::pagination::PaginationMode;
use crate::config::AppConfig;
use crate::constants::ranking::DEFAULT_TOP_N;

/// SWAPI Fetcher - Rank Star Wars characters
#[derive(Parser, Debug)]
#[command(
    name = "swapi_fetcher",
    version,
    about = "Fetch the SWAPI character roster and rank it by BMI or age",
    long_about = "Retrieves every character from the Star Wars API, fetching pages concurrently,
and prints the whole roster or the top characters by body mass index or age."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Upstream API root, e.g. https://swapi.dev/api
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Maximum number of concurrent page workers
    #[arg(short = 'w', long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    /// Pagination strategy
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub pagination: Option<PaginationMode>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the complete roster
    Fetch(OutputArgs),

    /// Print the characters with the highest body mass index
    TopBmi(RankArgs),

    /// Print the oldest characters
    TopAge(RankArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Output format selection
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the ranking commands
#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Number of characters to show
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_TOP_N)]
    pub count: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Rendering of character lists
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON array with numeric fields as strings
    Json,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level requested by flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl GlobalArgs {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(workers) = self.workers {
            config.fetch.max_workers = workers;
        }
        if let Some(pagination) = self.pagination {
            config.fetch.pagination = pagination;
        }
    }
}
