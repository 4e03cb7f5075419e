//! HTTP page data source
//!
//! Fetches pages from a host endpoint speaking the JSON paging protocol:
//! the query is POSTed as JSON, the response carries the page rows, the
//! total row count, and the full id universe.

use futures::future::BoxFuture;

use crate::domain::{PageQuery, PageResponse};
use crate::error::Result;
use crate::services::data_source::PageDataSource;

/// Data source backed by an HTTP endpoint
#[derive(Clone, Debug)]
pub struct HttpDataSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDataSource {
    /// Create a source for an endpoint with a default client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a source reusing a host-configured client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this source queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageDataSource for HttpDataSource {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'static, Result<PageResponse>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            tracing::debug!(
                "{}: fetching rows {}..{}",
                endpoint,
                query.start,
                query.start + query.length as u64
            );
            let response = client
                .post(&endpoint)
                .json(&query)
                .send()
                .await?
                .error_for_status()?;
            let page: PageResponse = response.json().await?;
            Ok(page)
        })
    }
}
