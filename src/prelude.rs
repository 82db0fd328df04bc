//! Prelude module for SWAPI Fetcher Library
//!
//! This module re-exports the most commonly used items from the library,
//! providing a convenient way to import everything needed for typical usage
//! with a single `use swapi_fetcher::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use swapi_fetcher::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load(None).await?;
//!     let (client_config, fetch_config) = config.to_runtime_config();
//!     let service = RosterService::connect(client_config, fetch_config)?;
//!
//!     let heaviest = service.top_by_bmi(DEFAULT_TOP_N).await?;
//!     println!("{} characters ranked", heaviest.len());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, FetchError, PageError, Result};

// Essential app components
pub use crate::app::{
    // Service layer
    CharacterRankings,
    Character,
    ClientConfig,
    FetchConfig,
    PageSource,
    PaginationMode,
    RosterCache,
    RosterClient,
    RosterService,
    SwapiClient,

    // Ranking functions
    top_by_age,
    top_by_bmi,
};

pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DEFAULT_RATE_LIMIT_RPS, DEFAULT_TOP_N, MAX_PAGE_WORKERS, USER_AGENT};

pub use std::sync::Arc;
