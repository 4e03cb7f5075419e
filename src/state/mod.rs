//! State Management Layer
//!
//! The selection state machine and its derived display logic. Follows a
//! unidirectional flow:
//!
//! ```text
//! UI Action / TableEvent → Tracker Method → State Update → Widget Repaint
//! ```

pub mod registry;
pub mod selection;
pub mod visibility;

pub use registry::SelectionTracker;
pub use selection::{Aggregate, RemoteSelection, TableMode};
pub use visibility::{ToolbarVisibility, toolbar_visibility};
