//! Individual page worker
//!
//! A worker repeatedly claims a page index from the shared queue, fetches it,
//! and reports the outcome on the result channel. It exits when the queue is
//! drained or when nobody is listening for results any more.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::types::PageOutcome;
use crate::app::client::PageSource;
use crate::app::queue::PageQueue;

/// Worker fetching pages until the queue is empty
#[derive(Debug)]
pub struct PageWorker {
    id: usize,
    source: Arc<dyn PageSource>,
    queue: Arc<PageQueue>,
    results_tx: mpsc::Sender<PageOutcome>,
}

impl PageWorker {
    /// Create a new page worker
    pub fn new(
        id: usize,
        source: Arc<dyn PageSource>,
        queue: Arc<PageQueue>,
        results_tx: mpsc::Sender<PageOutcome>,
    ) -> Self {
        Self {
            id,
            source,
            queue,
            results_tx,
        }
    }

    /// Run the worker loop; returns the number of pages reported
    pub async fn run(self) -> usize {
        let mut reported = 0;

        while let Some(page) = self.queue.get_next_work().await {
            let result = self.source.fetch_page(page).await;
            if let Err(e) = &result {
                debug!("Worker {} failed page {}: {}", self.id, page, e);
            }

            let outcome = PageOutcome {
                page,
                worker_id: self.id,
                result,
            };
            if self.results_tx.send(outcome).await.is_err() {
                // Aggregator stopped listening (first error already seen)
                debug!("Worker {} stopping: result channel closed", self.id);
                break;
            }
            reported += 1;
        }

        debug!("Worker {} finished after {} pages", self.id, reported);
        // Dropping `results_tx` here counts this worker out of the channel
        reported
    }
}
