//! Core application logic for SWAPI Fetcher
//!
//! This module contains the main application components: the HTTP page
//! client, data models, the roster cache, the concurrent page fetching
//! machinery and the rankings built on top of it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use swapi_fetcher::app::{CharacterRankings, ClientConfig, FetchConfig, RosterService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RosterService::connect(ClientConfig::default(), FetchConfig::default())?;
//!
//! for character in service.top_by_bmi(5).await? {
//!     println!("{} ({}cm, {}kg)", character.name, character.height, character.mass);
//! }
//!
//! // Served from the cache, no further upstream requests
//! let oldest = service.top_by_age(5).await?;
//! println!("Oldest: {:?}", oldest.first().map(|c| &c.name));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod models;
pub mod pagination;
pub mod queue;
pub mod ranking;
pub mod roster;
pub mod service;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main public API
pub use cache::{CacheStats, RosterCache};
pub use client::{ClientConfig, PageSource, SwapiClient};
pub use models::{Character, PeopleResponse};
pub use pagination::{
    page_count, ContinuationFollower, CountedPager, PaginationMode, PaginationStrategy,
};
pub use queue::PageQueue;
pub use ranking::{abs_birth_year, bmi, top_by_age, top_by_bmi};
pub use roster::{FetchConfig, RosterClient};
pub use service::{CharacterRankings, RosterService};
pub use worker::{PageOutcome, PageWorkerPool, PoolConfig, PoolReport};
