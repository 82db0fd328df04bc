//! Single-slot roster snapshot store

use tokio::sync::RwLock;
use tracing::debug;

use crate::app::models::Character;

use super::stats::{CacheStats, StatsCounter};

/// In-memory cache holding at most one assembled roster
///
/// Both directions copy: [`set`](Self::set) stores its own copy of the input
/// and [`get`](Self::get) hands out a fresh copy, so callers can never alias
/// cache-owned memory.
#[derive(Debug, Default)]
pub struct RosterCache {
    snapshot: RwLock<Option<Vec<Character>>>,
    stats: StatsCounter,
}

impl RosterCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the stored roster, or `None` if nothing was ever stored
    pub async fn get(&self) -> Option<Vec<Character>> {
        let snapshot = self.snapshot.read().await;
        match snapshot.as_ref() {
            Some(characters) => {
                self.stats.record_hit();
                Some(characters.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Replace the stored roster with a copy of `characters`
    pub async fn set(&self, characters: &[Character]) {
        // Copy outside the lock; readers only ever see a complete roster
        let copy = characters.to_vec();
        let count = copy.len();

        *self.snapshot.write().await = Some(copy);
        self.stats.record_write();

        debug!("Cached roster snapshot of {} characters", count);
    }

    /// Whether a roster has been stored
    pub async fn is_populated(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Current usage statistics
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn roster(names: &[&str]) -> Vec<Character> {
        names.iter().map(|name| Character::new(*name)).collect()
    }

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = RosterCache::new();
        assert_eq!(cache.get().await, None);
        assert!(!cache.is_populated().await);
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = RosterCache::new();
        let characters = roster(&["Luke Skywalker", "R2-D2"]);

        cache.set(&characters).await;

        assert_eq!(cache.get().await, Some(characters));
        assert!(cache.is_populated().await);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().writes, 1);
    }

    #[tokio::test]
    async fn test_empty_roster_is_still_a_snapshot() {
        let cache = RosterCache::new();
        cache.set(&[]).await;
        assert_eq!(cache.get().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_caller_buffer_is_independent() {
        let cache = RosterCache::new();
        let mut characters = roster(&["C-3PO"]);
        cache.set(&characters).await;

        // Mutating the caller's buffer must not reach the cache
        characters[0].name = "Threepio".to_string();
        characters.push(Character::new("R2-D2"));

        let cached = cache.get().await.unwrap();
        assert_eq!(cached, roster(&["C-3PO"]));
    }

    #[tokio::test]
    async fn test_returned_copy_is_independent() {
        let cache = RosterCache::new();
        cache.set(&roster(&["Leia Organa"])).await;

        let mut first = cache.get().await.unwrap();
        first.clear();

        assert_eq!(cache.get().await.unwrap(), roster(&["Leia Organa"]));
    }

    #[tokio::test]
    async fn test_set_replaces_snapshot() {
        let cache = RosterCache::new();
        cache.set(&roster(&["Han Solo"])).await;
        cache.set(&roster(&["Chewbacca", "Lando Calrissian"])).await;

        assert_eq!(
            cache.get().await.unwrap(),
            roster(&["Chewbacca", "Lando Calrissian"])
        );
        assert_eq!(cache.stats().writes, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_see_whole_snapshots() {
        let cache = Arc::new(RosterCache::new());
        let small = roster(&["A"]);
        let large = roster(&["B", "C", "D", "E", "F"]);

        let mut handles = Vec::new();
        for i in 0..8 {
            let cache = Arc::clone(&cache);
            let (small, large) = (small.clone(), large.clone());
            handles.push(tokio::spawn(async move {
                for round in 0..50 {
                    if (i + round) % 3 == 0 {
                        let next = if round % 2 == 0 { &small } else { &large };
                        cache.set(next).await;
                    } else if let Some(seen) = cache.get().await {
                        // Only complete snapshots are ever observable
                        assert!(seen == small || seen == large, "torn read: {:?}", seen);
                    }
                }
            }));
        }

        for result in futures::future::join_all(handles).await {
            result.unwrap();
        }
        assert!(cache.is_populated().await);
    }
}
