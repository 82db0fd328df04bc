//! Page source abstraction
//!
//! The roster client and its pagination strategies only ever talk to a
//! [`PageSource`], so the HTTP client can be swapped for any other source of
//! pages.

use async_trait::async_trait;

use crate::app::models::PeopleResponse;
use crate::errors::PageResult;

/// Something that can hand out pages of the people collection
///
/// Implementations perform exactly one upstream request per call and never
/// retry.
#[async_trait]
pub trait PageSource: Send + Sync + std::fmt::Debug {
    /// Fetch a page by its 1-based index
    async fn fetch_page(&self, page: u32) -> PageResult<PeopleResponse>;

    /// Fetch a page by an upstream-supplied continuation URL
    async fn fetch_url(&self, url: &str) -> PageResult<PeopleResponse>;
}
