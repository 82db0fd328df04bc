//! Test doubles shared by unit tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::app::client::PageSource;
use crate::app::models::{Character, PeopleResponse};
use crate::errors::{PageError, PageResult};

/// Scripted answer for one page
#[derive(Debug, Clone)]
pub enum MockPage {
    /// Successful page
    Ok(PeopleResponse),
    /// Upstream rejects the request with this status
    Status(u16),
}

/// Request recorded by [`MockSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRequest {
    Page(u32),
    Url(String),
}

/// In-memory [`PageSource`] with scripted pages and a request log
#[derive(Debug, Default)]
pub struct MockSource {
    pages: HashMap<u32, MockPage>,
    delays: HashMap<u32, Duration>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockSource {
    /// Continuation URL the mock hands out for `page`
    pub fn page_link(page: u32) -> String {
        format!("mock://swapi/people/?page={}", page)
    }

    /// Upstream of `total` characters split into pages of `page_size`
    ///
    /// Characters are named `Character 1..=total`; page 1 carries `count`
    /// and every page except the last links to its successor.
    pub fn with_uniform_pages(total: usize, page_size: usize) -> Self {
        let characters: Vec<Character> = (1..=total)
            .map(|i| Character::new(format!("Character {}", i)))
            .collect();
        let chunks: Vec<&[Character]> = characters.chunks(page_size.max(1)).collect();
        let page_count = chunks.len() as u32;

        let mut source = Self::default();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let page = index as u32 + 1;
            let response = PeopleResponse {
                count: (page == 1).then_some(total as u64),
                next: (page < page_count).then(|| Self::page_link(page + 1)),
                results: chunk.to_vec(),
            };
            source.pages.insert(page, MockPage::Ok(response));
        }
        source
    }

    /// Script the answer for `page`
    pub fn with_page(mut self, page: u32, answer: MockPage) -> Self {
        self.pages.insert(page, answer);
        self
    }

    /// Delay the answer for `page`
    pub fn with_delay(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    /// Every request made so far
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Page indices requested through `fetch_page`
    pub fn page_requests(&self) -> Vec<u32> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                MockRequest::Page(page) => Some(page),
                MockRequest::Url(_) => None,
            })
            .collect()
    }

    /// Number of requests made so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    async fn answer(&self, page: u32) -> PageResult<PeopleResponse> {
        if let Some(delay) = self.delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        match self.pages.get(&page) {
            Some(MockPage::Ok(response)) => Ok(response.clone()),
            Some(MockPage::Status(code)) => Err(PageError::UpstreamStatus { code: *code }),
            None => Err(PageError::UpstreamStatus { code: 404 }),
        }
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch_page(&self, page: u32) -> PageResult<PeopleResponse> {
        self.requests.lock().unwrap().push(MockRequest::Page(page));
        self.answer(page).await
    }

    async fn fetch_url(&self, url: &str) -> PageResult<PeopleResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(MockRequest::Url(url.to_string()));

        let page = url
            .rsplit_once("?page=")
            .and_then(|(_, page)| page.parse::<u32>().ok())
            .ok_or_else(|| PageError::InvalidUrl {
                url: url.to_string(),
                reason: "no page parameter".to_string(),
            })?;
        self.answer(page).await
    }
}
