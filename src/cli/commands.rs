//! Command handlers for SWAPI Fetcher CLI
//!
//! This module implements the command handlers that connect CLI arguments
//! to the roster service.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::app::{CharacterRankings, RosterService};
use crate::cli::args::{ConfigAction, ConfigArgs, GlobalArgs, OutputArgs, RankArgs};
use crate::cli::output::{render, Metric};
use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Load the configuration file and apply command-line overrides on top
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or the merged settings
/// are invalid
pub async fn load_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut config = AppConfig::load(global.config.as_deref()).await?;
    global.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

/// Build the roster service from the effective configuration
pub fn build_service(config: &AppConfig) -> Result<RosterService> {
    let (client_config, fetch_config) = config.to_runtime_config();
    debug!(
        "Connecting to {} ({} pagination, up to {} workers)",
        client_config.base_url, fetch_config.pagination, fetch_config.max_workers
    );
    RosterService::connect(client_config, fetch_config)
}

/// Handle the fetch command
pub async fn handle_fetch(service: &impl CharacterRankings, args: OutputArgs) -> Result<()> {
    let start_time = Instant::now();
    let characters = service.fetch().await?;
    info!(
        "Retrieved {} characters in {:?}",
        characters.len(),
        start_time.elapsed()
    );

    println!("{}", render(&characters, args.format, Metric::None)?);
    Ok(())
}

/// Handle the top-bmi command
pub async fn handle_top_bmi(service: &impl CharacterRankings, args: RankArgs) -> Result<()> {
    let characters = service.top_by_bmi(args.count).await?;
    info!("Ranked {} characters by BMI", characters.len());

    println!("{}", render(&characters, args.output.format, Metric::Bmi)?);
    Ok(())
}

/// Handle the top-age command
pub async fn handle_top_age(service: &impl CharacterRankings, args: RankArgs) -> Result<()> {
    let characters = service.top_by_age(args.count).await?;
    info!("Ranked {} characters by age", characters.len());

    println!("{}", render(&characters, args.output.format, Metric::Age)?);
    Ok(())
}

/// Handle configuration management
pub async fn handle_config(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Init { path, force } => handle_config_init(path, force).await,
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Write a default configuration file
async fn handle_config_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => AppConfig::default_config_path()?,
    };

    if path.exists() && !force {
        return Err(AppError::generic(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    AppConfig::write_default(&path).await?;
    println!("Created configuration file: {}", path.display());
    Ok(())
}
