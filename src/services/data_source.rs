//! Page data source
//!
//! Abstraction over wherever page data comes from, so the fetch layer and
//! tests don't care whether a real server is answering.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::{PageQuery, PageResponse, RowId};
use crate::error::Result;

/// Trait for answering page queries
pub trait PageDataSource: Send + Sync + 'static {
    /// Fetch one page of rows plus the current id universe.
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<PageResponse>>;
}

/// Simple in-memory data source
///
/// Serves windows over a fixed row list. Sorting and filtering are the
/// real server's job and are ignored here.
pub struct MemoryDataSource {
    rows: Arc<Vec<(RowId, serde_json::Value)>>,
}

impl MemoryDataSource {
    /// Create a new MemoryDataSource
    pub fn new(rows: Vec<(RowId, serde_json::Value)>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Create a source of `count` rows with ids `1..=count` and empty cells
    pub fn with_ids(count: i64) -> Self {
        Self::new(
            (1..=count)
                .map(|id| (RowId(id), serde_json::Value::Null))
                .collect(),
        )
    }

    fn page(&self, query: &PageQuery) -> PageResponse {
        let all_ids: Vec<RowId> = self.rows.iter().map(|(id, _)| *id).collect();
        let rows = self
            .rows
            .iter()
            .skip(query.start as usize)
            .take(query.length)
            .map(|(_, cells)| cells.clone())
            .collect();
        PageResponse {
            total_count: self.rows.len() as u64,
            rows,
            all_ids,
        }
    }
}

impl PageDataSource for MemoryDataSource {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<PageResponse>> {
        let response = self.page(&query);
        Box::pin(async move { Ok(response) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_windows_rows() {
        let source = MemoryDataSource::with_ids(25);
        let response = source
            .fetch_page(PageQuery::new(10, 10))
            .await
            .expect("page");

        assert_eq!(response.total_count, 25);
        assert_eq!(response.rows.len(), 10);
        assert_eq!(response.all_ids.len(), 25);
        assert!(response.validate().is_ok());
    }

    #[tokio::test]
    async fn test_memory_source_clamps_last_window() {
        let source = MemoryDataSource::with_ids(25);
        let response = source
            .fetch_page(PageQuery::new(20, 10))
            .await
            .expect("page");
        assert_eq!(response.rows.len(), 5);
    }
}
