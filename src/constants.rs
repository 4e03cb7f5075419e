//! Widget Defaults
//!
//! Centralized defaults shared across widget configuration and export.

/// Number of rows shown on one page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long a persisted page-size preference stays valid (one day)
pub const PAGE_SIZE_TTL_SECS: u64 = 86_400;

/// Field name carrying selected row ids in a submitted form
pub const EXPORT_IDS_FIELD: &str = "ids";

/// Message surfaced when a submission is attempted with nothing selected
pub const DEFAULT_EMPTY_EXPORT_MESSAGE: &str = "Nothing was selected";
