//! Continuation-following pagination

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::PaginationStrategy;
use crate::app::client::PageSource;
use crate::app::models::{Character, PeopleResponse};
use crate::errors::{FetchError, FetchResult};

/// Follows `next` links one page at a time until none is left
#[derive(Debug, Clone)]
pub struct ContinuationFollower {
    max_pages: u32,
}

impl ContinuationFollower {
    pub fn new(max_pages: u32) -> Self {
        Self { max_pages }
    }
}

#[async_trait]
impl PaginationStrategy for ContinuationFollower {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn fetch_remaining(
        &self,
        source: Arc<dyn PageSource>,
        first: &PeopleResponse,
    ) -> FetchResult<Vec<Character>> {
        let mut characters = Vec::new();
        let mut next = first.next_url().map(str::to_owned);
        let mut pages_fetched: u64 = 1;

        while let Some(url) = next {
            if pages_fetched >= u64::from(self.max_pages) {
                return Err(FetchError::PageLimitExceeded {
                    pages: pages_fetched + 1,
                    limit: self.max_pages,
                });
            }

            let response = source.fetch_url(&url).await?;
            pages_fetched += 1;
            debug!(
                "Page {} returned {} characters",
                pages_fetched,
                response.page_size()
            );

            next = response.next_url().map(str::to_owned);
            characters.extend(response.results);
        }

        Ok(characters)
    }
}
