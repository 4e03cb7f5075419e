//! TableEvent - Table Data Events
//!
//! Events delivered from the fetch layer to the selection tracker after
//! each remote page exchange.

use std::sync::Arc;

use crate::domain::{PageResponse, TableId};

/// Events emitted after a remote page exchange
#[derive(Clone, Debug)]
pub enum TableEvent {
    /// A page of data arrived for a table
    PageLoaded {
        /// Target table
        table: TableId,
        /// Request sequence number stamped by the fetcher
        seq: u64,
        /// Decoded server payload
        response: PageResponse,
    },

    /// A page fetch failed; selection state stays untouched
    FetchFailed {
        /// Target table
        table: TableId,
        /// Request sequence number stamped by the fetcher
        seq: u64,
        /// Human-readable failure detail
        detail: Arc<str>,
    },
}

impl TableEvent {
    /// The table this event belongs to
    pub fn table(&self) -> &TableId {
        match self {
            TableEvent::PageLoaded { table, .. } => table,
            TableEvent::FetchFailed { table, .. } => table,
        }
    }

    /// The request sequence number this event answers
    pub fn seq(&self) -> u64 {
        match self {
            TableEvent::PageLoaded { seq, .. } => *seq,
            TableEvent::FetchFailed { seq, .. } => *seq,
        }
    }
}
