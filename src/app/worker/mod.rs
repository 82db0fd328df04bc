//! Page worker system for concurrent roster fetching
//!
//! Workers pull page indices from a shared [`PageQueue`](crate::app::queue::PageQueue),
//! fetch them through a [`PageSource`](crate::app::client::PageSource) and push
//! each [`PageOutcome`] to a result channel. The channel closes once every
//! worker has exited, so an aggregator can simply read until `None`.
//!
//! # Module Organization
//!
//! - [`config`] - Pool sizing
//! - [`types`] - Outcome and report types
//! - [`core`] - Individual worker loop
//! - [`pool`] - Spawning, joining and aborting workers
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swapi_fetcher::app::client::{PageSource, SwapiClient};
//! use swapi_fetcher::app::queue::PageQueue;
//! use swapi_fetcher::app::worker::{PageWorkerPool, PoolConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source: Arc<dyn PageSource> = Arc::new(SwapiClient::new()?);
//! let queue = Arc::new(PageQueue::from_range(2..=9));
//!
//! let (pool, mut results) = PageWorkerPool::start(PoolConfig::default(), source, queue)?;
//! while let Some(outcome) = results.recv().await {
//!     println!("page {}: ok={}", outcome.page, outcome.result.is_ok());
//! }
//! pool.join().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod pool;
pub mod types;

pub use self::core::PageWorker;
pub use config::PoolConfig;
pub use pool::PageWorkerPool;
pub use types::{PageOutcome, PoolReport};
