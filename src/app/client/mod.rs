//! HTTP client for the SWAPI people collection
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: Core HTTP operations with rate limiting and error mapping
//! - `source`: The [`PageSource`] trait the roster client is written against

use async_trait::async_trait;
use url::Url;

use crate::app::models::PeopleResponse;
use crate::constants::swapi;
use crate::errors::{ClientError, ClientResult, PageError, PageResult};

pub mod config;
pub mod http;
pub mod source;

pub use config::ClientConfig;
pub use source::PageSource;

use http::HttpHandler;

/// HTTP client for retrieving pages of SWAPI characters
#[derive(Debug)]
pub struct SwapiClient {
    http_handler: HttpHandler,
    base_url: String,
}

impl SwapiClient {
    /// Creates a client for the public SWAPI instance
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if HTTP client creation fails
    pub fn new() -> ClientResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration
    ///
    /// Trailing slashes on the configured base URL are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the base URL does not parse, the rate limit
    /// is zero, or the reqwest client cannot be built
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let client = config.build_http_client()?;
        let http_handler = HttpHandler::new(client, config.rate_limit_rps)?;

        tracing::info!("Created SWAPI client for {}", base_url);

        Ok(Self {
            http_handler,
            base_url,
        })
    }

    /// Get the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the given 1-based page of the people collection
    pub fn page_url(&self, page: u32) -> PageResult<Url> {
        let raw = format!(
            "{}/{}?{}={}",
            self.base_url,
            swapi::PEOPLE_PATH,
            swapi::PAGE_PARAM,
            page
        );
        parse_url(&raw)
    }
}

#[async_trait]
impl PageSource for SwapiClient {
    async fn fetch_page(&self, page: u32) -> PageResult<PeopleResponse> {
        let url = self.page_url(page)?;
        tracing::debug!("Fetching page {} from {}", page, url);
        self.http_handler.get_json(&url).await
    }

    async fn fetch_url(&self, url: &str) -> PageResult<PeopleResponse> {
        let url = parse_url(url)?;
        tracing::debug!("Following continuation {}", url);
        self.http_handler.get_json(&url).await
    }
}

fn parse_url(raw: &str) -> PageResult<Url> {
    Url::parse(raw).map_err(|e| PageError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_client(base_url: &str) -> SwapiClient {
        let config = ClientConfig {
            use_system_proxy: false,
            ..ClientConfig::with_base_url(base_url)
        };
        SwapiClient::with_config(config).unwrap()
    }

    #[test]
    fn test_default_client_creation() {
        let client = SwapiClient::new().unwrap();
        assert_eq!(client.base_url(), swapi::BASE_URL);
    }

    #[test]
    fn test_page_url_format() {
        let client = local_client("http://127.0.0.1:9999/api/");
        let url = client.page_url(3).unwrap();

        assert_eq!(url.path(), "/api/people/");
        assert_eq!(url.query(), Some("page=3"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::with_base_url("not a url");
        let result = SwapiClient::with_config(config);
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let config = ClientConfig {
            rate_limit_rps: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(
            SwapiClient::with_config(config),
            Err(ClientError::InvalidRateLimit)
        ));
    }

    #[tokio::test]
    async fn test_invalid_continuation_url() {
        let client = local_client("http://127.0.0.1:9999/api");
        let result = client.fetch_url("::not-a-url::").await;
        assert!(matches!(result, Err(PageError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport_error() {
        // Grab a free port and release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = local_client(&format!("http://127.0.0.1:{}/api", port));
        let result = client.fetch_page(1).await;
        assert!(matches!(result, Err(PageError::Transport { .. })));
    }
}
