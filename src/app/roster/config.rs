//! Roster fetch configuration

use serde::{Deserialize, Serialize};

use crate::app::pagination::PaginationMode;
use crate::constants::workers;
use crate::errors::{ConfigError, ConfigResult};

/// Settings controlling how the full roster is assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Pagination strategy selection
    pub pagination: PaginationMode,
    /// Upper bound on concurrent page workers
    pub max_workers: usize,
    /// Hard ceiling on pages per roster
    pub max_pages: u32,
    /// Capacity of the page result channel
    pub channel_buffer: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationMode::default(),
            max_workers: workers::MAX_PAGE_WORKERS,
            max_pages: workers::MAX_PAGES,
            channel_buffer: workers::CHANNEL_BUFFER_SIZE,
        }
    }
}

impl FetchConfig {
    /// Set the pagination mode
    pub fn with_pagination(mut self, pagination: PaginationMode) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the worker limit
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set the page ceiling
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.max_workers".to_string(),
                value: self.max_workers.to_string(),
                reason: "At least one worker is required".to_string(),
            });
        }
        if self.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.max_pages".to_string(),
                value: self.max_pages.to_string(),
                reason: "Page 1 alone needs a limit of at least 1".to_string(),
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.channel_buffer".to_string(),
                value: self.channel_buffer.to_string(),
                reason: "Result channel needs capacity".to_string(),
            });
        }
        Ok(())
    }
}
