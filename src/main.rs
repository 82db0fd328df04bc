//! SWAPI Fetcher CLI application
//!
//! Command-line interface for fetching the Star Wars API character roster and
//! ranking it by body mass index or age.

use std::process;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use swapi_fetcher::cli::{
    build_service, handle_config, handle_fetch, handle_top_age, handle_top_bmi, load_config, Cli,
    Commands,
};
use swapi_fetcher::config::LoggingConfig;
use swapi_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        error!(category = e.category(), error = ?e, "{}", e);
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();

    let config = match load_config(&cli.global).await {
        Ok(config) => config,
        Err(e) => {
            // Config errors are logged at the default level
            init_logging(&cli, &LoggingConfig::default())?;
            return Err(e);
        }
    };

    init_logging(&cli, &config.logging)?;
    info!("SWAPI Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Fetch(args) => {
            info!("Executing fetch command");
            handle_fetch(&build_service(&config)?, args).await
        }
        Commands::TopBmi(args) => {
            info!("Executing top-bmi command");
            handle_top_bmi(&build_service(&config)?, args).await
        }
        Commands::TopAge(args) => {
            info!("Executing top-age command");
            handle_top_age(&build_service(&config)?, args).await
        }
        Commands::Config(args) => handle_config(args, &config).await,
    }
}

/// Initialize logging from CLI verbosity, falling back to the config file level
fn init_logging(cli: &Cli, logging: &LoggingConfig) -> Result<()> {
    let log_level = match cli.log_level() {
        Some(level) => level,
        None => logging.level()?,
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("swapi_fetcher={}", log_level)
            .parse()
            .map_err(|e| swapi_fetcher::AppError::generic(format!("invalid log filter: {}", e)))?,
    );

    fmt()
        .with_env_filter(filter)
        .with_target(logging.show_target)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    }
    Ok(())
}
