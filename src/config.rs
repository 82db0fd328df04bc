//! Configuration management for SWAPI Fetcher
//!
//! Settings are assembled from several sources, later ones winning:
//! 1. Built-in defaults
//! 2. A TOML config file (explicit path, or the first standard location found)
//! 3. Environment variables (`SWAPI_BASE_URL`)
//! 4. Command-line flags (applied by the CLI)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::app::client::ClientConfig;
use crate::app::roster::FetchConfig;
use crate::constants::{self, env, limits, swapi, workers};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP client settings
    pub client: ClientConfig,
    /// Roster fetch settings
    pub fetch: FetchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
    /// Include the module target in log lines
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            show_target: false,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level(&self) -> ConfigResult<tracing::Level> {
        tracing::Level::from_str(self.level.trim()).map_err(|_| ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            value: self.level.clone(),
            reason: "Expected one of error, warn, info, debug, trace".to_string(),
        })
    }
}

impl AppConfig {
    /// Convert to the runtime configurations used by the roster service
    pub fn to_runtime_config(&self) -> (ClientConfig, FetchConfig) {
        (self.client.clone(), self.fetch.clone())
    }

    /// Load configuration from file and environment
    ///
    /// With `config_file_override` set, that file must exist. Otherwise the
    /// standard locations are searched and defaults are used if none exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a file cannot be read or parsed, or if the
    /// resulting configuration is invalid
    pub async fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_base_url_override(std::env::var(env::BASE_URL).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL if `value` is set and non-empty
    pub fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(base_url) = value.filter(|v| !v.trim().is_empty()) {
            debug!("Using base URL from {}: {}", env::BASE_URL, base_url);
            self.client.base_url = base_url.trim().to_string();
        }
    }

    /// Check every value the service depends on
    pub fn validate(&self) -> ConfigResult<()> {
        Url::parse(&self.client.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "client.base_url".to_string(),
            value: self.client.base_url.clone(),
            reason: e.to_string(),
        })?;

        if self.client.rate_limit_rps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.rate_limit_rps".to_string(),
                value: "0".to_string(),
                reason: "Rate limit must allow at least one request per second".to_string(),
            });
        }

        self.fetch.validate()?;
        self.logging.level()?;
        Ok(())
    }

    /// Default config file path for the current user
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(constants::config::APP_DIR_NAME)
            .join(constants::config::FILE_NAME))
    }

    /// Write a commented default config file to `path`
    ///
    /// Parent directories are created as needed; an existing file is
    /// overwritten.
    pub async fn write_default(path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, Self::generate_default_config_content())
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Wrote default configuration to {}", path.display());
        Ok(())
    }

    /// Configuration rendered as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(constants::config::LOCAL_FILE_NAME)];
        if let Ok(user_path) = Self::default_config_path() {
            search_paths.push(user_path);
        }

        let found = search_paths.into_iter().find(|path| path.exists());
        match &found {
            Some(path) => debug!("Found config file: {}", path.display()),
            None => debug!("No config file found in standard locations"),
        }
        found
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config: AppConfig = toml::from_str(&content)?;
        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate default configuration content with comments
    fn generate_default_config_content() -> String {
        format!(
            r#"# SWAPI Fetcher Configuration
# Any setting may be removed to fall back to its default.

[client]
# Upstream API root; SWAPI_BASE_URL overrides this
base_url = "{}"
tcp_keepalive = "30s"
tcp_nodelay = true
pool_idle_timeout = "90s"
pool_max_per_host = 10
request_timeout = "30s"
connect_timeout = "10s"
# Requests per second across all page workers
rate_limit_rps = {}
use_system_proxy = true

[fetch]
# auto, concurrent or sequential
pagination = "auto"
max_workers = {}
max_pages = {}
channel_buffer = {}

[logging]
# Used when no -v/-q flag is given: error, warn, info, debug, trace
level = "warn"
show_target = false
"#,
            swapi::BASE_URL,
            limits::DEFAULT_RATE_LIMIT_RPS,
            workers::MAX_PAGE_WORKERS,
            workers::MAX_PAGES,
            workers::CHANNEL_BUFFER_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pagination::PaginationMode;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.client.base_url, swapi::BASE_URL);
        assert_eq!(config.fetch.max_workers, workers::MAX_PAGE_WORKERS);
        assert_eq!(config.logging.level().unwrap(), tracing::Level::WARN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_content_matches_defaults() {
        let content = AppConfig::generate_default_config_content();
        let parsed: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(parsed, AppConfig::default());
        assert!(content.contains("[fetch]"));
    }

    #[tokio::test]
    async fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let result = AppConfig::load(Some(&config_path)).await;
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        tokio::fs::write(
            &config_path,
            r#"
[client]
request_timeout = "5s"
rate_limit_rps = 3

[fetch]
pagination = "sequential"
"#,
        )
        .await
        .unwrap();

        let config = AppConfig::load_from_file(&config_path).await.unwrap();
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
        assert_eq!(config.client.rate_limit_rps, 3);
        assert_eq!(config.fetch.pagination, PaginationMode::Sequential);
        assert_eq!(config.fetch.max_pages, workers::MAX_PAGES);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        tokio::fs::write(&config_path, "[fetch\nmax_workers = ")
            .await
            .unwrap();

        let result = AppConfig::load(Some(&config_path)).await;
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_write_default_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        AppConfig::write_default(&config_path).await.unwrap();
        let loaded = AppConfig::load_from_file(&config_path).await.unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_base_url_override() {
        let mut config = AppConfig::default();

        config.apply_base_url_override(Some("  ".to_string()));
        assert_eq!(config.client.base_url, swapi::BASE_URL);

        config.apply_base_url_override(Some("http://localhost:9000/api".to_string()));
        assert_eq!(config.client.base_url, "http://localhost:9000/api");

        config.apply_base_url_override(None);
        assert_eq!(config.client.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.client.base_url = "not a url".to_string();
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "client.base_url"),
            other => panic!("expected invalid base url, got {:?}", other),
        }

        let mut config = AppConfig::default();
        config.client.rate_limit_rps = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.fetch.max_workers = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[client]"));
        assert!(text.contains("pagination = \"auto\""));
    }
}
