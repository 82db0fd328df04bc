//! Worker pool configuration

use crate::constants::workers;
use crate::errors::{ConfigError, ConfigResult};

/// Sizing of a page worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of concurrent workers to spawn
    pub worker_count: usize,
    /// Capacity of the result channel
    pub channel_buffer: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            worker_count: workers::MAX_PAGE_WORKERS,
            channel_buffer: workers::CHANNEL_BUFFER_SIZE,
        }
    }
}

impl PoolConfig {
    /// Pool sized for `pages` pages of work, capped at `max_workers`
    pub fn for_pages(pages: usize, max_workers: usize, channel_buffer: usize) -> Self {
        Self {
            worker_count: pages.min(max_workers).max(1),
            channel_buffer: channel_buffer.max(1),
        }
    }

    /// Check that the pool can make progress
    pub fn validate(&self) -> ConfigResult<()> {
        if self.worker_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "worker_count".to_string(),
                value: "0".to_string(),
                reason: "At least one worker is required".to_string(),
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                field: "channel_buffer".to_string(),
                value: "0".to_string(),
                reason: "Result channel needs capacity".to_string(),
            });
        }
        Ok(())
    }
}
