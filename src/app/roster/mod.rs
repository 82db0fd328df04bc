//! Full roster assembly with caching
//!
//! [`RosterClient`] turns the paginated people collection into one complete
//! roster. The first successful fetch is cached; every later call is served
//! from the cache without touching the upstream. A fetch either returns every
//! character or fails, and a failure leaves the cache untouched.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::app::cache::RosterCache;
use crate::app::client::PageSource;
use crate::app::models::{Character, PeopleResponse};
use crate::app::pagination::{
    ContinuationFollower, CountedPager, PaginationMode, PaginationStrategy,
};
use crate::errors::{ConfigResult, FetchResult};

pub mod config;

pub use config::FetchConfig;

/// Cached fetcher for the complete character roster
#[derive(Debug)]
pub struct RosterClient {
    source: Arc<dyn PageSource>,
    cache: RosterCache,
    config: FetchConfig,
}

impl RosterClient {
    /// Create a client with default fetch settings
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            cache: RosterCache::new(),
            config: FetchConfig::default(),
        }
    }

    /// Create a client with custom fetch settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the settings are invalid
    pub fn with_config(source: Arc<dyn PageSource>, config: FetchConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            cache: RosterCache::new(),
            config,
        })
    }

    /// Roster cache
    pub fn cache(&self) -> &RosterCache {
        &self.cache
    }

    /// Fetch settings
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Complete roster, from the cache when available
    ///
    /// # Errors
    ///
    /// Returns the first page failure as `FetchError::Page`, or a pagination
    /// error if the pages could not be assembled.
    pub async fn fetch(&self) -> FetchResult<Vec<Character>> {
        if let Some(characters) = self.cache.get().await {
            debug!(
                "Serving {} characters from cache ({:.0}% hit rate)",
                characters.len(),
                self.cache.stats().hit_rate()
            );
            return Ok(characters);
        }

        let started = Instant::now();
        let first = self.source.fetch_page(1).await?;

        if first.results.is_empty() {
            info!("Upstream roster is empty");
            return Ok(Vec::new());
        }

        let rest = match self.select_strategy(&first) {
            Some(strategy) => {
                debug!("Fetching remaining pages with {} strategy", strategy.name());
                strategy
                    .fetch_remaining(Arc::clone(&self.source), &first)
                    .await?
            }
            None => Vec::new(),
        };
        let mut characters = first.results;
        characters.extend(rest);

        if let Some(count) = first.count {
            if count != characters.len() as u64 {
                warn!(
                    "Upstream reported {} characters but {} were fetched",
                    count,
                    characters.len()
                );
            }
        }

        self.cache.set(&characters).await;
        info!(
            "Fetched {} characters in {:.2?}",
            characters.len(),
            started.elapsed()
        );
        Ok(characters)
    }

    fn select_strategy(&self, first: &PeopleResponse) -> Option<Box<dyn PaginationStrategy>> {
        let concurrent = || -> Box<dyn PaginationStrategy> {
            Box::new(CountedPager::new(
                self.config.max_workers,
                self.config.max_pages,
                self.config.channel_buffer,
            ))
        };
        let sequential = || -> Box<dyn PaginationStrategy> {
            Box::new(ContinuationFollower::new(self.config.max_pages))
        };

        match self.config.pagination {
            PaginationMode::Concurrent => Some(concurrent()),
            PaginationMode::Sequential => Some(sequential()),
            PaginationMode::Auto if first.count.is_some() => Some(concurrent()),
            PaginationMode::Auto if first.next_url().is_some() => Some(sequential()),
            PaginationMode::Auto => None,
        }
    }
}
