//! Command-line interface components
//!
//! This module contains CLI-specific code for the SWAPI Fetcher application:
//! argument parsing, command handlers and output rendering.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{
    Cli, Commands, ConfigAction, ConfigArgs, GlobalArgs, OutputArgs, OutputFormat, RankArgs,
};
pub use commands::{
    build_service, handle_config, load_config, handle_fetch, handle_top_age, handle_top_bmi,
};
pub use output::{render, Metric};
