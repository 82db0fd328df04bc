//! Count-derived concurrent pagination

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{page_count, PaginationStrategy};
use crate::app::client::PageSource;
use crate::app::models::{Character, PeopleResponse};
use crate::app::queue::PageQueue;
use crate::app::worker::{PageWorkerPool, PoolConfig};
use crate::errors::{FetchError, FetchResult};

/// Fetches pages `2..=N` in parallel, `N` derived from page 1's `count`
#[derive(Debug, Clone)]
pub struct CountedPager {
    max_workers: usize,
    max_pages: u32,
    channel_buffer: usize,
}

impl CountedPager {
    /// Create a pager using at most `max_workers` workers and `max_pages` pages
    pub fn new(max_workers: usize, max_pages: u32, channel_buffer: usize) -> Self {
        Self {
            max_workers,
            max_pages,
            channel_buffer,
        }
    }
}

#[async_trait]
impl PaginationStrategy for CountedPager {
    fn name(&self) -> &'static str {
        "concurrent"
    }

    async fn fetch_remaining(
        &self,
        source: Arc<dyn PageSource>,
        first: &PeopleResponse,
    ) -> FetchResult<Vec<Character>> {
        let total = first.count.unwrap_or(0);
        let pages = page_count(total, first.page_size());

        if pages > u64::from(self.max_pages) {
            return Err(FetchError::PageLimitExceeded {
                pages,
                limit: self.max_pages,
            });
        }
        if pages <= 1 {
            debug!("Roster fits on a single page");
            return Ok(Vec::new());
        }

        // Bounded by max_pages above
        let last_page = pages as u32;
        let expected = (last_page - 1) as usize;
        let queue = Arc::new(PageQueue::from_range(2..=last_page));
        let config = PoolConfig::for_pages(expected, self.max_workers, self.channel_buffer);

        let (pool, mut results_rx) = PageWorkerPool::start(config, source, queue)?;
        info!(
            "Fetching {} more pages with {} workers",
            expected,
            pool.worker_count()
        );

        let mut received: BTreeMap<u32, Vec<Character>> = BTreeMap::new();
        let mut duplicates = 0;

        while let Some(outcome) = results_rx.recv().await {
            match outcome.result {
                Ok(response) => {
                    debug!(
                        "Page {} returned {} characters (worker {})",
                        outcome.page,
                        response.page_size(),
                        outcome.worker_id
                    );
                    if received.insert(outcome.page, response.results).is_some() {
                        duplicates += 1;
                    }
                }
                Err(e) => {
                    warn!(
                        "Page {} failed on worker {}: {}",
                        outcome.page, outcome.worker_id, e
                    );
                    pool.abort();
                    return Err(FetchError::Page(e));
                }
            }
        }

        let report = pool.join().await;
        if let Some(&worker_id) = report.failed_workers.first() {
            return Err(FetchError::WorkerPanic { worker_id });
        }

        if received.len() != expected || duplicates > 0 {
            return Err(FetchError::MissingPages {
                expected,
                received: received.len() + duplicates,
            });
        }

        // Page order keeps the merged roster deterministic
        Ok(received.into_values().flatten().collect())
    }
}
