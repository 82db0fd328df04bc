//! Cache statistics
//!
//! Lock-free counters recording how the roster cache is used. Readers of the
//! statistics get a plain [`CacheStats`] copy.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time cache usage figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Reads served from a populated cache
    pub hits: u64,
    /// Reads that found the cache empty
    pub misses: u64,
    /// Snapshots stored
    pub writes: u64,
}

impl CacheStats {
    /// Total number of reads
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Percentage of reads served from cache
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64 * 100.0,
        }
    }
}

/// Shared counters behind [`CacheStats`]
#[derive(Debug, Default)]
pub(crate) struct StatsCounter {
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
}

impl StatsCounter {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
        }
    }
}
