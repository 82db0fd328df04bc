//! Application constants for SWAPI Fetcher
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names
pub mod env {
    /// Environment variable overriding the upstream base URL
    pub const BASE_URL: &str = "SWAPI_BASE_URL";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "SWAPI-Fetcher/0.1.0 (Roster Ranking Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum idle connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 10;

    /// Upper bound on the random delay added before each request
    pub const RATE_LIMIT_JITTER: Duration = Duration::from_millis(20);
}

/// Rate limiting configuration
pub mod limits {
    /// Default rate limit for upstream requests (requests per second)
    pub const DEFAULT_RATE_LIMIT_RPS: u32 = 20;
}

/// Upstream service locations
pub mod swapi {
    /// Public SWAPI base URL
    pub const BASE_URL: &str = "https://swapi.dev/api";

    /// Path segment of the people collection, relative to the base URL
    pub const PEOPLE_PATH: &str = "people/";

    /// Query parameter carrying the 1-based page index
    pub const PAGE_PARAM: &str = "page";
}

/// Worker and concurrency configuration
pub mod workers {
    /// Maximum number of concurrent page workers
    pub const MAX_PAGE_WORKERS: usize = 10;

    /// Channel buffer size for page results
    pub const CHANNEL_BUFFER_SIZE: usize = 32;

    /// Hard ceiling on pages fetched for one roster
    pub const MAX_PAGES: u32 = 1000;
}

/// Ranking parameters
pub mod ranking {
    /// Default number of characters returned by a ranking
    pub const DEFAULT_TOP_N: usize = 20;

    /// Suffix for birth years before the reference event (negative offset)
    pub const BEFORE_SUFFIX: &str = "BBY";

    /// Suffix for birth years after the reference event (positive offset)
    pub const AFTER_SUFFIX: &str = "ABY";

    /// Shortest well-formed birth year: one digit plus the suffix
    pub const MIN_BIRTH_YEAR_LEN: usize = 4;
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "swapi-fetcher.toml";

    /// Directory name under the user config directory
    pub const APP_DIR_NAME: &str = "swapi-fetcher";

    /// Configuration file name inside the user config directory
    pub const FILE_NAME: &str = "config.toml";
}

// Re-export commonly used constants at the top level
pub use http::USER_AGENT;
pub use limits::DEFAULT_RATE_LIMIT_RPS;
pub use ranking::DEFAULT_TOP_N;
pub use workers::MAX_PAGE_WORKERS;
