//! Read-through roster cache
//!
//! Holds the most recently assembled roster so that repeated ranking requests
//! do not hit the upstream again. There is no expiry or invalidation: once a
//! complete roster has been stored it is served for the rest of the process
//! lifetime.
//!
//! # Module Organization
//!
//! - [`snapshot`] - The lock-guarded single-slot store
//! - [`stats`] - Hit/miss/write counters
//!
//! # Examples
//!
//! ```rust
//! use swapi_fetcher::app::cache::RosterCache;
//! use swapi_fetcher::app::models::Character;
//!
//! # async fn example() {
//! let cache = RosterCache::new();
//! assert!(cache.get().await.is_none());
//!
//! cache.set(&[Character::new("Luke Skywalker")]).await;
//! let roster = cache.get().await.unwrap();
//! assert_eq!(roster[0].name, "Luke Skywalker");
//! # }
//! ```

pub mod snapshot;
pub mod stats;

pub use snapshot::RosterCache;
pub use stats::CacheStats;
