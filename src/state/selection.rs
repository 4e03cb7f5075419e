//! Selection state
//!
//! Per-table selection bookkeeping. A locally-fed table keeps no state
//! here: every row is in the document, so the rendered checkboxes are the
//! source of truth. A remotely-fed table only ever has one page of rows in
//! the document, so the selected ids and the id universe are tracked out
//! of band and reconciled on every page load.

use ahash::AHashSet;

use crate::domain::{PageResponse, RowId};

/// Tri-state of the aggregate select-all control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    /// Nothing selected
    Unselected,
    /// Some but not all rows selected
    Partial,
    /// Every row selected
    Selected,
}

impl Aggregate {
    /// Derive the indicator from a selected count and a row total
    pub fn from_counts(selected: usize, total: u64) -> Self {
        if selected == 0 || total == 0 {
            Aggregate::Unselected
        } else if (selected as u64) < total {
            Aggregate::Partial
        } else {
            Aggregate::Selected
        }
    }

    /// Checked attribute of the control
    pub fn is_checked(self) -> bool {
        self != Aggregate::Unselected
    }

    /// Whether the partial marker is shown
    pub fn is_partial(self) -> bool {
        self == Aggregate::Partial
    }
}

/// Selection bookkeeping for a remotely-fed table
///
/// Invariant: `selected` is always a subset of `all_ids`. Page loads that
/// shrink the universe prune the selection; toggles for ids outside the
/// universe are rejected.
#[derive(Clone, Debug, Default)]
pub struct RemoteSelection {
    /// Ids the user has selected
    selected: AHashSet<RowId>,
    /// Total row count reported by the last applied page
    total_count: u64,
    /// Every selectable id, in display order, from the last applied page
    all_ids: Vec<RowId>,
    /// Sequence number of the last applied page response
    last_seq: u64,
}

impl RemoteSelection {
    /// Create an empty selection with no universe yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected rows
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Total row count of the table
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whether a row is selected
    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Sequence number of the last applied page response
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Apply a received page payload.
    ///
    /// Returns false when the payload is stale (its sequence number is
    /// older than the last applied one), in which case nothing changes.
    pub fn apply_page(&mut self, seq: u64, response: &PageResponse) -> bool {
        if seq < self.last_seq {
            return false;
        }
        self.last_seq = seq;
        self.total_count = response.total_count;
        self.all_ids = response.all_ids.clone();

        // The universe may have shrunk under the selection.
        if !self.selected.is_empty() {
            let universe: AHashSet<RowId> = self.all_ids.iter().copied().collect();
            self.selected.retain(|id| universe.contains(id));
        }
        true
    }

    /// Record a row checkbox toggle.
    ///
    /// Selecting an id outside the universe is rejected (returns false);
    /// deselecting is a no-op when the id is absent.
    pub fn toggle(&mut self, id: RowId, checked: bool) -> bool {
        if checked {
            if !self.all_ids.contains(&id) {
                return false;
            }
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
        true
    }

    /// Flip between everything selected and nothing selected.
    ///
    /// Anything short of a full selection selects the whole universe,
    /// including rows never fetched to a visible page; a full selection
    /// clears. An empty table stays empty.
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() as u64 == self.total_count {
            self.selected.clear();
        } else {
            self.selected = self.all_ids.iter().copied().collect();
        }
    }

    /// Selected ids in universe (display) order
    pub fn ordered_selection(&self) -> Vec<RowId> {
        self.all_ids
            .iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Aggregate indicator for the current state
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::from_counts(self.selected.len(), self.total_count)
    }
}

/// How a table gets its rows, with mode-specific bookkeeping
///
/// Decided once when the table is registered and never changed.
#[derive(Clone, Debug)]
pub enum TableMode {
    /// All rows in the document; no out-of-band state
    Local,
    /// Pages fetched on demand; selection tracked out of band
    Remote(RemoteSelection),
}

impl TableMode {
    /// Whether this table is remotely fed
    pub fn is_remote(&self) -> bool {
        matches!(self, TableMode::Remote(_))
    }
}
