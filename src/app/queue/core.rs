//! Core page queue implementation
//!
//! A single producer fills the queue with page indices up front; any number
//! of workers then claim indices until the queue runs dry.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use tokio::sync::Mutex;
use tracing::debug;

/// Work queue of 1-based page indices
///
/// Each index is handed out at most once. Workers never wait for a specific
/// page: they take whatever is next and exit when `get_next_work` returns
/// `None`.
#[derive(Debug)]
pub struct PageQueue {
    pending: Mutex<VecDeque<u32>>,
}

impl PageQueue {
    /// Create a queue holding every page in `pages`
    pub fn from_range(pages: RangeInclusive<u32>) -> Self {
        let pending: VecDeque<u32> = pages.collect();
        debug!("Queued {} pages", pending.len());

        Self {
            pending: Mutex::new(pending),
        }
    }

    /// Claim the next page index, or `None` once the queue is drained
    pub async fn get_next_work(&self) -> Option<u32> {
        self.pending.lock().await.pop_front()
    }
}
