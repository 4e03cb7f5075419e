//! In-memory table widget
//!
//! Simple `TableWidget` implementation that holds row nodes directly. Used
//! as a test double and as the binding for hosts that mirror the widget's
//! rendered rows into plain data.

use super::table_widget::{RowNode, SelectAllState, TableWidget};

/// Simple in-memory table widget
#[derive(Debug, Default)]
pub struct MemoryWidget {
    rows: Vec<RowNode>,
    select_all: SelectAllState,
    page_count: usize,
}

impl MemoryWidget {
    /// Create a widget rendering the given rows on a single page
    pub fn new(rows: Vec<RowNode>) -> Self {
        Self {
            rows,
            select_all: SelectAllState::default(),
            page_count: 1,
        }
    }

    /// Set the reported page count
    pub fn with_page_count(mut self, page_count: usize) -> Self {
        self.page_count = page_count;
        self
    }

    /// Replace the rendered rows (a new page was drawn)
    pub fn set_rows(&mut self, rows: Vec<RowNode>) {
        self.rows = rows;
    }

    /// Set the reported page count
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
    }

    /// Get a rendered row by index
    pub fn row(&self, index: usize) -> Option<&RowNode> {
        self.rows.get(index)
    }
}

impl TableWidget for MemoryWidget {
    fn rendered_rows(&self) -> &[RowNode] {
        &self.rows
    }

    fn rendered_rows_mut(&mut self) -> &mut [RowNode] {
        &mut self.rows
    }

    fn select_all(&self) -> SelectAllState {
        self.select_all
    }

    fn set_select_all(&mut self, state: SelectAllState) {
        self.select_all = state;
    }

    fn page_count(&self) -> usize {
        self.page_count
    }
}
