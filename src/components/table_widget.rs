//! Table widget surface
//!
//! Abstraction over the third-party widget that renders and paginates the
//! table. The tracker never walks a real document tree; it sees the widget
//! through this trait as a list of rendered row nodes plus the aggregate
//! select-all control.

use std::sync::Arc;

use crate::constants::EXPORT_IDS_FIELD;
use crate::domain::RowId;
use crate::export::FormField;

/// Visual state of the aggregate select-all control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectAllState {
    /// Checked attribute: any row selected
    pub checked: bool,
    /// Partial marker: some but not all rows selected
    pub partial: bool,
}

/// A rendered row as the widget exposes it
///
/// `id` is the value of the row's checkbox; a row without a checkbox has
/// `None` and never participates in selection. `fields` are the row's
/// other input fields, carried along for export.
#[derive(Clone, Debug)]
pub struct RowNode {
    /// Row checkbox value, if the row has a checkbox
    pub id: Option<RowId>,
    /// Name the row checkbox submits under
    pub checkbox_name: Arc<str>,
    /// Checked state of the row checkbox
    pub checked: bool,
    /// Non-checkbox input fields in the row
    pub fields: Vec<FormField>,
}

impl RowNode {
    /// Create a row with a checkbox carrying the given id
    pub fn new(id: RowId) -> Self {
        Self {
            id: Some(id),
            checkbox_name: EXPORT_IDS_FIELD.into(),
            checked: false,
            fields: Vec::new(),
        }
    }

    /// Create a row without a checkbox
    pub fn without_checkbox() -> Self {
        Self {
            id: None,
            checkbox_name: EXPORT_IDS_FIELD.into(),
            checked: false,
            fields: Vec::new(),
        }
    }

    /// Set the checkbox submit name
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.checkbox_name = name.into();
        self
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Add a non-checkbox input field
    pub fn field(mut self, name: impl Into<Arc<str>>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::new(name, value));
        self
    }

    /// The fields this row contributes to a form submission.
    ///
    /// Mirrors document form serialization: the checkbox contributes its
    /// value only while checked; other inputs contribute whenever their
    /// value is non-empty.
    pub fn export_fields(&self) -> Vec<FormField> {
        let mut fields = Vec::new();
        if self.checked {
            if let Some(id) = self.id {
                fields.push(FormField::new(self.checkbox_name.clone(), id.to_string()));
            }
        }
        fields.extend(
            self.fields
                .iter()
                .filter(|f| !f.value.is_empty())
                .cloned(),
        );
        fields
    }
}

/// Surface of the third-party table widget the tracker drives
///
/// `rendered_rows` returns every row node the widget currently has in the
/// document: all rows for a locally-fed table (its pagination merely hides
/// rows), the current page only for a remotely-fed one.
pub trait TableWidget {
    /// Currently rendered row nodes, top to bottom
    fn rendered_rows(&self) -> &[RowNode];

    /// Mutable access to the rendered row nodes
    fn rendered_rows_mut(&mut self) -> &mut [RowNode];

    /// Current state of the select-all control
    fn select_all(&self) -> SelectAllState;

    /// Paint the select-all control
    fn set_select_all(&mut self, state: SelectAllState);

    /// Number of pages the widget currently reports
    fn page_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_row_exports_checkbox_value() {
        let row = RowNode::new(RowId(7)).checked(true);
        assert_eq!(row.export_fields(), vec![FormField::new("ids", "7")]);
    }

    #[test]
    fn test_unchecked_row_exports_nothing_for_checkbox() {
        let row = RowNode::new(RowId(7));
        assert!(row.export_fields().is_empty());
    }

    #[test]
    fn test_non_empty_fields_export_regardless_of_checkbox() {
        let row = RowNode::new(RowId(7))
            .field("sample", "s-182")
            .field("note", "");
        assert_eq!(
            row.export_fields(),
            vec![FormField::new("sample", "s-182")]
        );
    }
}
