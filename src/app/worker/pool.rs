//! Worker pool management and coordination
//!
//! [`PageWorkerPool`] spawns a fixed number of [`PageWorker`] tasks sharing one
//! queue and one result channel. Every worker holds its own sender clone and
//! the pool keeps none, so the receiver yields `None` exactly when the last
//! worker has exited. That closure is the aggregator's completion signal.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::config::PoolConfig;
use super::core::PageWorker;
use super::types::{PageOutcome, PoolReport};
use crate::app::client::PageSource;
use crate::app::queue::PageQueue;
use crate::errors::ConfigResult;

/// Pool of running page workers
///
/// Dropping the pool aborts any worker still running.
#[derive(Debug)]
pub struct PageWorkerPool {
    worker_handles: Vec<JoinHandle<usize>>,
}

impl PageWorkerPool {
    /// Start `config.worker_count` workers draining `queue`
    ///
    /// Returns the pool together with the receiving end of the result channel.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the pool configuration is invalid
    pub fn start(
        config: PoolConfig,
        source: Arc<dyn PageSource>,
        queue: Arc<PageQueue>,
    ) -> ConfigResult<(Self, mpsc::Receiver<PageOutcome>)> {
        config.validate()?;

        let (results_tx, results_rx) = mpsc::channel(config.channel_buffer);

        let worker_handles = (0..config.worker_count)
            .map(|worker_id| {
                let worker = PageWorker::new(
                    worker_id,
                    Arc::clone(&source),
                    Arc::clone(&queue),
                    results_tx.clone(),
                );
                tokio::spawn(worker.run())
            })
            .collect();

        // Only workers hold senders from here on
        drop(results_tx);

        info!("Started {} page workers", config.worker_count);

        Ok((Self { worker_handles }, results_rx))
    }

    /// Number of workers spawned
    pub fn worker_count(&self) -> usize {
        self.worker_handles.len()
    }

    /// Cancel every worker, including requests in flight
    pub fn abort(mut self) {
        let handles = std::mem::take(&mut self.worker_handles);
        for handle in &handles {
            handle.abort();
        }
        debug!("Aborted {} page workers", handles.len());
    }

    /// Wait for every worker to exit
    pub async fn join(mut self) -> PoolReport {
        let handles = std::mem::take(&mut self.worker_handles);
        let mut report = PoolReport::default();

        for (worker_id, result) in futures::future::join_all(handles)
            .await
            .into_iter()
            .enumerate()
        {
            match result {
                Ok(pages) => report.pages_reported += pages,
                Err(e) => {
                    warn!("Page worker {} terminated abnormally: {}", worker_id, e);
                    report.failed_workers.push(worker_id);
                }
            }
        }

        debug!(
            "Joined page workers: {} pages reported, {} failed",
            report.pages_reported,
            report.failed_workers.len()
        );
        report
    }
}

impl Drop for PageWorkerPool {
    fn drop(&mut self) {
        for handle in &self.worker_handles {
            handle.abort();
        }
    }
}
