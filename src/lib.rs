//! Selection tracking for paginated data tables
//!
//! This crate is the client-side state layer between a host application and
//! a third-party paginated table widget. It tracks which rows are selected
//! in each table, including tables whose rows are fetched page by page so
//! that most selected rows are not in the document at any moment, and keeps
//! the aggregate "select all" control consistent with that selection.
//!
//! ```text
//! checkbox / select-all click           remote page fetch
//!            │                                 │
//!            ▼                                 ▼ TableEvent
//! ┌───────────────────────────────────────────────────────┐
//! │                   SelectionTracker                    │
//! │        (per-table registry + reconciliation)          │
//! └───────────────────────────────────────────────────────┘
//!            │ repaint checkboxes, select-all state
//!            ▼
//!       TableWidget (third-party, abstracted as a trait)
//! ```

pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod export;
pub mod services;
pub mod state;
pub mod utils;
