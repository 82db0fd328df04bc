//! Pagination strategies for assembling the full roster
//!
//! Once page 1 is in hand, a [`PaginationStrategy`] obtains every remaining
//! page. Two interchangeable implementations exist:
//!
//! - [`CountedPager`] derives the page count from the upstream `count` and
//!   fetches pages `2..=N` concurrently through the worker pool.
//! - [`ContinuationFollower`] follows `next` links one request at a time and is
//!   the fallback when the upstream does not report a reliable total.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app::client::PageSource;
use crate::app::models::{Character, PeopleResponse};
use crate::errors::FetchResult;

pub mod concurrent;
pub mod sequential;

pub use concurrent::CountedPager;
pub use sequential::ContinuationFollower;

/// Strategy for fetching every page after the first
#[async_trait]
pub trait PaginationStrategy: Send + Sync + fmt::Debug {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Characters from every page after `first`
    ///
    /// Either all remaining pages are returned or the call fails; partial
    /// results are never handed back.
    async fn fetch_remaining(
        &self,
        source: Arc<dyn PageSource>,
        first: &PeopleResponse,
    ) -> FetchResult<Vec<Character>>;
}

/// How the roster client chooses a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Concurrent when page 1 reports a count, otherwise follow `next` links
    #[default]
    Auto,
    /// Always derive the page count and fetch concurrently
    Concurrent,
    /// Always follow `next` links one page at a time
    Sequential,
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaginationMode::Auto => "auto",
            PaginationMode::Concurrent => "concurrent",
            PaginationMode::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PaginationMode::Auto),
            "concurrent" => Ok(PaginationMode::Concurrent),
            "sequential" => Ok(PaginationMode::Sequential),
            other => Err(format!(
                "unknown pagination mode '{}', expected auto, concurrent or sequential",
                other
            )),
        }
    }
}

/// Number of pages needed to hold `total` characters at `page_size` per page
///
/// Never less than 1, since page 1 has already been fetched. A zero page size
/// means page 1 was empty and there is nothing left to fetch.
pub fn page_count(total: u64, page_size: usize) -> u64 {
    if page_size == 0 {
        return 1;
    }
    let page_size = page_size as u64;
    let pages = total / page_size + u64::from(total % page_size != 0);
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_matches_continuation_count() {
        // count=3, page size 2 -> pages 1 and 2
        assert_eq!(page_count(3, 2), 2);
        // SWAPI: 82 people, 10 per page -> 9 pages
        assert_eq!(page_count(82, 10), 9);
        // Exact multiples must not add a trailing empty page
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(10, 10), 1);
    }

    #[test]
    fn test_page_count_lower_bound() {
        assert_eq!(page_count(0, 1), 1);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(50, 0), 1);
    }

    #[test]
    fn test_page_count_huge_total() {
        assert_eq!(page_count(u64::MAX, 1), u64::MAX);
        assert_eq!(page_count(u64::MAX, 2), u64::MAX / 2 + 1);
        assert_eq!(page_count(u64::MAX - 1, 2), u64::MAX / 2);
    }

    #[test]
    fn test_pagination_mode_parsing() {
        assert_eq!("auto".parse::<PaginationMode>(), Ok(PaginationMode::Auto));
        assert_eq!(
            " Sequential ".parse::<PaginationMode>(),
            Ok(PaginationMode::Sequential)
        );
        assert!("parallel".parse::<PaginationMode>().is_err());
        assert_eq!(PaginationMode::Concurrent.to_string(), "concurrent");
        assert_eq!(PaginationMode::default(), PaginationMode::Auto);
    }
}
