//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on the widget or service layers and represent
//! the paging and declaration surface of a table.

pub mod declaration;
pub mod page;
pub mod table;

pub use declaration::{
    ClassVocabulary, ColumnDeclaration, TableCapabilities, TableDeclaration, TableKind,
};
pub use page::{PageQuery, PageResponse, SortDir, SortOrder};
pub use table::{RowId, TableId};
