//! Components - Widget Surface
//!
//! The widget-facing side of the crate: the trait the tracker drives the
//! third-party table widget through, an in-memory implementation, and the
//! render configuration produced at initialization.

pub mod memory_widget;
pub mod table_widget;
pub mod widget_config;

pub use memory_widget::MemoryWidget;
pub use table_widget::{RowNode, SelectAllState, TableWidget};
pub use widget_config::{ColumnDef, RemoteConfig, WidgetConfig};
