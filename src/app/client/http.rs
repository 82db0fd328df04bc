//! Core HTTP operations with rate limiting
//!
//! This module issues the actual GET requests against the upstream and turns
//! every failure into a typed [`PageError`]: transport problems, non-success
//! statuses and undecodable bodies are kept apart. Requests are not retried;
//! a failed page fails the whole roster fetch.

use std::num::NonZeroU32;

use governor::{clock::DefaultClock, state::InMemoryState, Jitter, Quota, RateLimiter};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::http;
use crate::errors::{ClientError, ClientResult, PageError, PageResult};

type DirectRateLimiter = RateLimiter<governor::state::NotKeyed, InMemoryState, DefaultClock>;

/// HTTP operations handler
#[derive(Debug)]
pub struct HttpHandler {
    client: Client,
    rate_limiter: DirectRateLimiter,
}

impl HttpHandler {
    /// Creates a new HttpHandler with the given client and rate limiting
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidRateLimit` if `rate_limit_rps` is zero
    pub fn new(client: Client, rate_limit_rps: u32) -> ClientResult<Self> {
        let rate_limiter = Self::build_rate_limiter(rate_limit_rps)?;
        Ok(Self {
            client,
            rate_limiter,
        })
    }

    fn build_rate_limiter(rate_limit_rps: u32) -> ClientResult<DirectRateLimiter> {
        let quota =
            Quota::per_second(NonZeroU32::new(rate_limit_rps).ok_or(ClientError::InvalidRateLimit)?);
        Ok(RateLimiter::direct(quota))
    }

    /// Fetches `url` and decodes the JSON body into `T`
    ///
    /// # Errors
    ///
    /// - `PageError::Transport` if the request or body read fails
    /// - `PageError::UpstreamStatus` if the status is not 2xx
    /// - `PageError::Decode` if the body is not the expected JSON shape
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> PageResult<T> {
        // Apply rate limiting with jitter to avoid thundering herd
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(http::RATE_LIMIT_JITTER))
            .await;

        let transport = |source: reqwest::Error| PageError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Upstream rejected {} with HTTP {}", url, status.as_u16());
            return Err(PageError::UpstreamStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());

        serde_json::from_slice(&body).map_err(|source| PageError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
