//! Page fetcher
//!
//! Fire-and-forget page fetching. Each request is stamped with a per-table
//! monotonically increasing sequence number before the fetch is spawned;
//! the completion (success or failure) arrives as a `TableEvent` on the
//! channel, carrying that stamp so the consumer can recognize and drop
//! responses that complete out of order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use crossbeam_channel::Sender;

use crate::domain::{PageQuery, TableId};
use crate::eventing::TableEvent;
use crate::services::data_source::PageDataSource;
use crate::services::runtime::spawn_in_tokio;

/// Spawns page fetches and stamps their sequence numbers
pub struct PageFetcher {
    source: Arc<dyn PageDataSource>,
    tx: Sender<TableEvent>,
    sequences: AHashMap<TableId, Arc<AtomicU64>>,
}

impl PageFetcher {
    /// Create a fetcher delivering completions on the given sender
    pub fn new(source: Arc<dyn PageDataSource>, tx: Sender<TableEvent>) -> Self {
        Self {
            source,
            tx,
            sequences: AHashMap::new(),
        }
    }

    fn sequence(&mut self, table: &TableId) -> Arc<AtomicU64> {
        self.sequences
            .entry(table.clone())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .clone()
    }

    /// The last sequence number stamped for a table
    pub fn last_stamped(&self, table: &TableId) -> u64 {
        self.sequences
            .get(table)
            .map(|seq| seq.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Request a page for a table. Returns the stamped sequence number.
    ///
    /// Never blocks: the fetch runs detached on the tokio runtime and its
    /// outcome arrives as a `TableEvent`, not here. Requests are not
    /// cancelled by newer ones; the stamp is what lets late completions be
    /// ignored downstream.
    pub fn request_page(&mut self, table: &TableId, query: PageQuery) -> u64 {
        let seq = self.sequence(table).fetch_add(1, Ordering::SeqCst) + 1;
        let future = self.source.fetch_page(query);
        let tx = self.tx.clone();
        let table = table.clone();

        spawn_in_tokio(async move {
            let event = match future.await {
                Ok(response) => TableEvent::PageLoaded {
                    table,
                    seq,
                    response,
                },
                Err(e) => {
                    tracing::warn!("{}: page fetch #{} failed - {}", table, seq, e);
                    TableEvent::FetchFailed {
                        table,
                        seq,
                        detail: e.to_string().into(),
                    }
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!("event channel closed; dropping page completion");
            }
        });
        seq
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("tables", &self.sequences.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::data_source::MemoryDataSource;
    use std::time::Duration;

    #[test]
    fn test_sequences_are_monotonic_per_table() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut fetcher = PageFetcher::new(Arc::new(MemoryDataSource::with_ids(25)), tx);
        let samples = TableId::new("samples");
        let members = TableId::new("members");

        assert_eq!(fetcher.request_page(&samples, PageQuery::new(0, 10)), 1);
        assert_eq!(fetcher.request_page(&samples, PageQuery::new(10, 10)), 2);
        // Independent counter per table.
        assert_eq!(fetcher.request_page(&members, PageQuery::new(0, 10)), 1);
        assert_eq!(fetcher.last_stamped(&samples), 2);

        let mut seqs = Vec::new();
        for _ in 0..3 {
            let event = rx
                .recv_timeout(Duration::from_secs(5))
                .expect("completion event");
            if event.table() == &samples {
                seqs.push(event.seq());
            }
            assert!(matches!(event, TableEvent::PageLoaded { .. }));
        }
        seqs.sort_unstable();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[test]
    fn test_completion_carries_page_payload() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut fetcher = PageFetcher::new(Arc::new(MemoryDataSource::with_ids(25)), tx);
        let table = TableId::new("samples");

        fetcher.request_page(&table, PageQuery::new(0, 10));
        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("completion event");
        match event {
            TableEvent::PageLoaded { response, seq, .. } => {
                assert_eq!(seq, 1);
                assert_eq!(response.total_count, 25);
                assert_eq!(response.all_ids.len(), 25);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
