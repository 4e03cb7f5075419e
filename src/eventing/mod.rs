//! Eventing - Fetch → Tracker Event Flow
//!
//! The event vocabulary carried from the service layer to the state layer.

pub mod table_event;

pub use table_event::TableEvent;
