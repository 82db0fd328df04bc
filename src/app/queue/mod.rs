//! Work queue for concurrent page fetching
//!
//! Page indices `2..=N` are loaded into a [`PageQueue`] once the page count is
//! known. Page workers claim indices from it until it is drained, which keeps
//! all workers busy without any of them waiting on a particular page.
//!
//! # Basic Usage
//!
//! ```rust
//! use swapi_fetcher::app::queue::PageQueue;
//!
//! # async fn example() {
//! let queue = PageQueue::from_range(2..=4);
//!
//! while let Some(page) = queue.get_next_work().await {
//!     println!("fetching page {}", page);
//! }
//! assert_eq!(queue.get_next_work().await, None);
//! # }
//! ```

pub mod core;

pub use self::core::PageQueue;
