//! Error types for SWAPI Fetcher
//!
//! This module defines the error types for all components of the application.
//! Page-level failures are typed by cause so callers can tell a network problem
//! from an upstream rejection or a malformed body, and everything funnels into
//! [`AppError`] at the binary boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors retrieving or decoding a single upstream page
#[derive(Error, Debug)]
pub enum PageError {
    /// Network-level failure reaching the upstream (connect, timeout, body read)
    #[error("error querying SWAPI: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("SWAPI returned HTTP {code}")]
    UpstreamStatus { code: u16 },

    /// Response body does not have the expected shape
    #[error("error reading SWAPI response: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A page or continuation URL could not be parsed
    #[error("invalid page URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors assembling the full roster
#[derive(Error, Debug)]
pub enum FetchError {
    /// A page request failed; the whole fetch is abandoned
    #[error("error fetching characters from SWAPI: {0}")]
    Page(#[from] PageError),

    /// Page results did not cover every expected page exactly once
    #[error("incomplete roster: expected {expected} pages, received {received}")]
    MissingPages { expected: usize, received: usize },

    /// A page worker panicked or was cancelled before reporting
    #[error("page worker {worker_id} terminated unexpectedly")]
    WorkerPanic { worker_id: usize },

    /// Pagination ran past the configured ceiling
    #[error("pagination exceeded {limit} pages ({pages} required)")]
    PageLimitExceeded { pages: u64, limit: u32 },

    /// Fetch settings rejected before any page worker started
    #[error("invalid fetch configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Per-character birth year parse failure
///
/// Never escapes the ranking functions: characters failing to parse are
/// excluded from age rankings instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthYearError {
    /// Value does not match `<non-negative decimal>(BBY|ABY)`
    #[error("unparseable birth year: {value:?}")]
    Unparseable { value: String },
}

/// HTTP client construction errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// reqwest client could not be built
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Base URL is not a valid absolute URL
    #[error("invalid base URL {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Rate limit must allow at least one request per second
    #[error("rate limit must be non-zero")]
    InvalidRateLimit,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration file could not be read or written
    #[error("Configuration file I/O failed: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No user configuration directory on this platform
    #[error("Could not determine user config directory")]
    NoConfigDir,
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Roster fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// HTTP client construction error
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output serialization error
    #[error("Failed to serialize output")]
    Serialize(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable (transient)
    ///
    /// A failed fetch leaves the cache empty, so retrying the whole operation
    /// is always safe; only transport problems and server-side statuses are
    /// worth retrying though.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Fetch(FetchError::Page(PageError::Transport { .. })) => true,
            AppError::Fetch(FetchError::Page(PageError::UpstreamStatus { code })) => {
                *code == 429 || *code >= 500
            }
            AppError::Fetch(FetchError::WorkerPanic { .. }) => true,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => "fetch",
            AppError::Client(_) => "client",
            AppError::Config(_) => "config",
            AppError::Serialize(_) => "output",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }

    /// Message safe to show an end user
    ///
    /// Upstream failures are reported generically; the full chain is for the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Fetch(FetchError::Config(e)) => e.to_string(),
            AppError::Fetch(_) => {
                "unable to retrieve characters from the upstream service".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Page result type alias
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Client construction result type alias
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
