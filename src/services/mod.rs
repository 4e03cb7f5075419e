//! Service Layer
//!
//! Async externals behind trait seams: the page data source and the
//! fire-and-forget fetcher that bridges completions back to the state
//! layer as events.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                  PageFetcher                   │
//! │  ┌────────────────┐   ┌─────────────────────┐  │
//! │  │ PageDataSource │   │ per-table sequence  │  │
//! │  │ (http/memory)  │   │      stamping       │  │
//! │  └────────────────┘   └─────────────────────┘  │
//! └────────────────────────────────────────────────┘
//!                      │
//!                      ▼ TableEvent
//!        SelectionTracker (state layer)
//! ```

mod data_source;
mod fetcher;
mod http_source;
mod runtime;

pub use data_source::*;
pub use fetcher::*;
pub use http_source::*;
pub use runtime::*;
