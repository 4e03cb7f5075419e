//! Server paging protocol
//!
//! Wire types for the page exchange with a remote data source. A query
//! names a window (offset + length) plus the active sort and filter; the
//! response carries the rows of that window, the total row count, and the
//! full ordered id universe of the table. The universe is what makes
//! "select all" meaningful when only one page of rows exists client-side.

use serde::{Deserialize, Serialize};

use crate::domain::table::RowId;
use crate::error::{Error, Result};

/// Sort direction for one column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// Per-column sort instruction, outermost first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Zero-based column index
    pub column: usize,
    /// Direction
    pub dir: SortDir,
}

/// One page request sent to the data source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Index of the first row of the requested window
    pub start: u64,
    /// Window length (page size)
    pub length: usize,
    /// Active sort, empty when sorting is off
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortOrder>,
    /// Active filter string, if filtering is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageQuery {
    /// Create a query for a window with no sort or filter
    pub fn new(start: u64, length: usize) -> Self {
        Self {
            start,
            length,
            sort: Vec::new(),
            search: None,
        }
    }

    /// Set the sort spec
    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Set the filter string
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// One page of data plus the selection universe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Total number of rows in the table, across all pages
    pub total_count: u64,
    /// Cell data for the requested window, opaque to the tracker
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
    /// Every selectable row id in the table, in display order
    pub all_ids: Vec<RowId>,
}

impl PageResponse {
    /// Check the payload's internal consistency.
    ///
    /// The id universe must cover exactly the reported total; anything else
    /// means the server truncated or duplicated ids and applying it would
    /// corrupt the tracked selection.
    pub fn validate(&self) -> Result<()> {
        if self.all_ids.len() as u64 != self.total_count {
            return Err(Error::MalformedResponse {
                reason: format!(
                    "id universe has {} entries but total_count is {}",
                    self.all_ids.len(),
                    self.total_count
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<i64>) -> Vec<RowId> {
        range.map(RowId).collect()
    }

    #[test]
    fn test_response_validation_accepts_matching_universe() {
        let response = PageResponse {
            total_count: 3,
            rows: Vec::new(),
            all_ids: ids(1..=3),
        };
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_response_validation_rejects_mismatched_universe() {
        let response = PageResponse {
            total_count: 5,
            rows: Vec::new(),
            all_ids: ids(1..=3),
        };
        let err = response.validate().expect_err("should reject");
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_response_decoding_requires_id_universe() {
        // A payload without all_ids must fail to decode rather than default
        // to an empty universe.
        let raw = r#"{"total_count": 2, "rows": []}"#;
        assert!(serde_json::from_str::<PageResponse>(raw).is_err());
    }

    #[test]
    fn test_query_round_trip() {
        let query = PageQuery::new(20, 10)
            .with_sort(vec![SortOrder {
                column: 1,
                dir: SortDir::Desc,
            }])
            .with_search("rob");
        let encoded = serde_json::to_string(&query).expect("encode");
        let decoded: PageQuery = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, query);
    }
}
