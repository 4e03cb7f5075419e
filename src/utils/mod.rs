//! Utils - Local Persistence Helpers

pub mod page_size_store;

pub use page_size_store::PageSizeStore;
