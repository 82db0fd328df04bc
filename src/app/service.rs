//! Outbound roster service
//!
//! [`RosterService`] is what a rendering layer talks to: it fetches the cached
//! roster and applies the rankings. [`CharacterRankings`] abstracts it so that
//! collaborators can be tested without an upstream.

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::client::{ClientConfig, PageSource, SwapiClient};
use crate::app::models::Character;
use crate::app::ranking;
use crate::app::roster::{FetchConfig, RosterClient};
use crate::errors::{FetchResult, Result};

/// Roster queries offered to collaborators
#[async_trait]
pub trait CharacterRankings: Send + Sync {
    /// The complete roster
    async fn fetch(&self) -> FetchResult<Vec<Character>>;

    /// The `n` characters with the highest BMI
    async fn top_by_bmi(&self, n: usize) -> FetchResult<Vec<Character>>;

    /// The `n` oldest characters
    async fn top_by_age(&self, n: usize) -> FetchResult<Vec<Character>>;
}

/// Roster fetching and ranking over one cached roster
#[derive(Debug)]
pub struct RosterService {
    roster: RosterClient,
}

impl RosterService {
    /// Service backed by the live upstream
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or either
    /// configuration is invalid
    pub fn connect(client_config: ClientConfig, fetch_config: FetchConfig) -> Result<Self> {
        let source: Arc<dyn PageSource> = Arc::new(SwapiClient::with_config(client_config)?);
        let roster = RosterClient::with_config(source, fetch_config)?;
        Ok(Self::new(roster))
    }

    /// Service over an existing roster client
    pub fn new(roster: RosterClient) -> Self {
        Self { roster }
    }

    /// Underlying roster client
    pub fn roster(&self) -> &RosterClient {
        &self.roster
    }
}

#[async_trait]
impl CharacterRankings for RosterService {
    async fn fetch(&self) -> FetchResult<Vec<Character>> {
        self.roster.fetch().await
    }

    async fn top_by_bmi(&self, n: usize) -> FetchResult<Vec<Character>> {
        let characters = self.roster.fetch().await?;
        Ok(ranking::top_by_bmi(characters, n))
    }

    async fn top_by_age(&self, n: usize) -> FetchResult<Vec<Character>> {
        let characters = self.roster.fetch().await?;
        Ok(ranking::top_by_age(characters, n))
    }
}
