//! Selection tracker
//!
//! Single source of truth for per-table selection state. Owns the table
//! registry, consumes table events from the fetch layer, and drives the
//! widget's row checkboxes and select-all control.
//!
//! ```text
//! UI toggle ──► tracker ──► repaint rows ──► recompute select-all
//! page load ──► validate ──► apply (unless stale) ──► repaint ──► recompute
//! ```

use ahash::AHashMap;

use crate::components::{SelectAllState, TableWidget, WidgetConfig};
use crate::constants::EXPORT_IDS_FIELD;
use crate::domain::{
    ClassVocabulary, PageResponse, RowId, TableCapabilities, TableDeclaration, TableId,
    TableKind,
};
use crate::error::{Error, Result};
use crate::eventing::TableEvent;
use crate::export::{ExportPayload, FormField};
use crate::state::selection::{Aggregate, RemoteSelection, TableMode};
use crate::state::visibility::{self, ToolbarVisibility};

/// Record kept per registered table
#[derive(Clone, Debug)]
struct TableRecord {
    mode: TableMode,
    caps: TableCapabilities,
}

/// Per-table selection state machine
///
/// Created once at page initialization and discarded with the page; all
/// tables live in one tracker, mutually independent.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    tables: AHashMap<TableId, TableRecord>,
    vocab: ClassVocabulary,
}

impl SelectionTracker {
    /// Create a tracker using the default class vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker using a host-supplied class vocabulary
    pub fn with_vocabulary(vocab: ClassVocabulary) -> Self {
        Self {
            tables: AHashMap::new(),
            vocab,
        }
    }

    /// Scan a declaration scope and register every table in it.
    ///
    /// Each table's mode is decided here, permanently, from its declared
    /// classes; remotely-fed tables start with an empty selection.
    /// Re-registering an id replaces the previous record (last write
    /// wins). Returns the widget configuration for each table in scope
    /// order, for the host to hand to the widget.
    pub fn initialize(&mut self, scope: &[TableDeclaration]) -> Vec<WidgetConfig> {
        scope
            .iter()
            .map(|decl| {
                let config = WidgetConfig::from_declaration(decl, &self.vocab);
                let mode = match decl.kind(&self.vocab) {
                    TableKind::Remote { .. } => TableMode::Remote(RemoteSelection::new()),
                    TableKind::Local => TableMode::Local,
                };
                tracing::debug!(
                    "{}: registering {} table",
                    decl.id,
                    if mode.is_remote() { "remote" } else { "local" }
                );
                self.tables.insert(
                    decl.id.clone(),
                    TableRecord {
                        mode,
                        caps: decl.capabilities(&self.vocab),
                    },
                );
                config
            })
            .collect()
    }

    /// Whether a table id is registered
    pub fn is_registered(&self, table: &TableId) -> bool {
        self.tables.contains_key(table)
    }

    fn record(&self, table: &TableId) -> Result<&TableRecord> {
        self.tables.get(table).ok_or_else(|| Error::UnknownTable {
            table: table.to_string(),
        })
    }

    fn record_mut(&mut self, table: &TableId) -> Result<&mut TableRecord> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| Error::UnknownTable {
                table: table.to_string(),
            })
    }

    /// Dispatch an event from the fetch layer.
    pub fn handle_event(
        &mut self,
        event: &TableEvent,
        widget: &mut dyn TableWidget,
    ) -> Result<()> {
        match event {
            TableEvent::PageLoaded {
                table,
                seq,
                response,
            } => self.on_page_loaded(table, *seq, response, widget),
            TableEvent::FetchFailed { table, seq, detail } => {
                tracing::warn!(
                    "{}: page fetch #{} failed ({}), selection state untouched",
                    table,
                    seq,
                    detail
                );
                Ok(())
            }
        }
    }

    /// Apply a loaded page to a remotely-fed table.
    ///
    /// Malformed payloads fail here without touching state; stale payloads
    /// (older sequence number than the last applied) are dropped quietly.
    /// A fresh payload updates the total count and the id universe, then
    /// repaints the visible checkboxes and the select-all control.
    pub fn on_page_loaded(
        &mut self,
        table: &TableId,
        seq: u64,
        response: &PageResponse,
        widget: &mut dyn TableWidget,
    ) -> Result<()> {
        response.validate()?;

        let record = self.record_mut(table)?;
        match &mut record.mode {
            TableMode::Remote(selection) => {
                if !selection.apply_page(seq, response) {
                    tracing::debug!(
                        "{}: dropping stale page response #{} (last applied #{})",
                        table,
                        seq,
                        selection.last_seq()
                    );
                    return Ok(());
                }
            }
            TableMode::Local => {
                tracing::warn!("{}: page event for a locally-fed table, ignoring", table);
                return Ok(());
            }
        }

        self.repaint_visible(table, widget)?;
        self.recompute_aggregate(table, widget)?;
        Ok(())
    }

    /// Paint every rendered row checkbox from the tracked selection.
    ///
    /// Only meaningful for remotely-fed tables; a locally-fed table's
    /// checkboxes already are the state.
    pub fn repaint_visible(&self, table: &TableId, widget: &mut dyn TableWidget) -> Result<()> {
        let record = self.record(table)?;
        let selection = match &record.mode {
            TableMode::Remote(selection) => selection,
            TableMode::Local => return Ok(()),
        };

        for row in widget.rendered_rows_mut() {
            if let Some(id) = row.id {
                row.checked = selection.is_selected(id);
            }
        }
        Ok(())
    }

    /// Handle a click on the select-all control.
    pub fn toggle_select_all(
        &mut self,
        table: &TableId,
        widget: &mut dyn TableWidget,
    ) -> Result<()> {
        let record = self.record_mut(table)?;
        match &mut record.mode {
            TableMode::Local => {
                // All rows are rendered, whatever page is showing. If any
                // checkbox is unchecked the click selects everything,
                // otherwise it clears everything.
                let rows = widget.rendered_rows_mut();
                let check = rows.iter().any(|row| row.id.is_some() && !row.checked);
                for row in rows {
                    if row.id.is_some() {
                        row.checked = check;
                    }
                }
            }
            TableMode::Remote(selection) => {
                selection.toggle_select_all();
            }
        }

        self.repaint_visible(table, widget)?;
        self.recompute_aggregate(table, widget)?;
        Ok(())
    }

    /// Record a row checkbox toggle.
    ///
    /// Remotely-fed tables update their tracked set; locally-fed tables
    /// need no bookkeeping, but the select-all control still follows.
    pub fn on_row_toggle(
        &mut self,
        table: &TableId,
        row: RowId,
        checked: bool,
        widget: &mut dyn TableWidget,
    ) -> Result<()> {
        let record = self.record_mut(table)?;
        if let TableMode::Remote(selection) = &mut record.mode {
            if !selection.toggle(row, checked) {
                tracing::warn!("{}: toggle for id {} outside the universe, ignoring", table, row);
            }
        }
        self.recompute_aggregate(table, widget)?;
        Ok(())
    }

    /// Recompute the aggregate indicator and paint the select-all control.
    ///
    /// For a locally-fed table the total is the number of rendered row
    /// checkboxes; for a remotely-fed one it is the reported row total.
    pub fn recompute_aggregate(
        &self,
        table: &TableId,
        widget: &mut dyn TableWidget,
    ) -> Result<Aggregate> {
        let record = self.record(table)?;
        let aggregate = match &record.mode {
            TableMode::Remote(selection) => selection.aggregate(),
            TableMode::Local => {
                let rows = widget.rendered_rows();
                let total = rows.iter().filter(|row| row.id.is_some()).count();
                let checked = rows
                    .iter()
                    .filter(|row| row.id.is_some() && row.checked)
                    .count();
                Aggregate::from_counts(checked, total as u64)
            }
        };

        widget.set_select_all(SelectAllState {
            checked: aggregate.is_checked(),
            partial: aggregate.is_partial(),
        });
        Ok(aggregate)
    }

    /// Build the submission payload for a table.
    ///
    /// Locally-fed: the non-empty input fields of the rendered rows (the
    /// checkboxes contribute only while checked). Remotely-fed: the
    /// selected ids in display order, one field per id.
    pub fn export_selection(
        &self,
        table: &TableId,
        widget: &dyn TableWidget,
    ) -> Result<ExportPayload> {
        let record = self.record(table)?;
        let fields = match &record.mode {
            TableMode::Local => widget
                .rendered_rows()
                .iter()
                .flat_map(|row| row.export_fields())
                .collect(),
            TableMode::Remote(selection) => selection
                .ordered_selection()
                .into_iter()
                .map(|id| FormField::new(EXPORT_IDS_FIELD, id.to_string()))
                .collect(),
        };
        Ok(ExportPayload::new(fields))
    }

    /// Toolbar visibility for a table, given the widget's page count.
    pub fn toolbar_visibility(
        &self,
        table: &TableId,
        widget: &dyn TableWidget,
    ) -> Result<ToolbarVisibility> {
        let record = self.record(table)?;
        Ok(visibility::toolbar_visibility(
            &record.caps,
            widget.page_count(),
        ))
    }
}
