//! Data structures exchanged between page workers and the aggregator

use crate::app::models::PeopleResponse;
use crate::errors::PageResult;

/// Result of one page request, tagged with where it came from
#[derive(Debug)]
pub struct PageOutcome {
    /// 1-based page index
    pub page: u32,
    /// Worker that fetched the page
    pub worker_id: usize,
    /// Decoded page or the reason it could not be obtained
    pub result: PageResult<PeopleResponse>,
}

/// Summary of a pool after all workers were joined
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Outcomes sent by workers that exited normally
    pub pages_reported: usize,
    /// Workers that panicked or were cancelled
    pub failed_workers: Vec<usize>,
}

