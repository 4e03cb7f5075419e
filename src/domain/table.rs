//! Table and row identifiers

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Unique identifier for a table instance on a page
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TableId(pub Arc<str>);

impl TableId {
    /// Create a new TableId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TableId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TableId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer identifier of a selectable row
///
/// Carried as the value of the row's checkbox and echoed back by the data
/// source in the id universe of every page response.
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RowId(pub i64);

impl RowId {
    /// Get the raw id value
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
