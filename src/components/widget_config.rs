//! Widget render configuration
//!
//! The full configuration a host hands to the table widget when a table is
//! initialized, derived from the table's declaration. The tracker does not
//! interpret most of this; it exists so initialization produces everything
//! the widget needs in one place.

use std::time::Duration;

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_TTL_SECS};
use crate::domain::{ClassVocabulary, TableDeclaration, TableId, TableKind};

/// Per-column widget configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Zero-based column index
    pub index: usize,
    /// Whether the header is clickable for sorting
    pub sortable: bool,
    /// Sort numerically even when cells carry formatted text
    pub numeric_formatted: bool,
}

/// Remote-mode widget configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Endpoint answering page queries
    pub endpoint: String,
}

/// Render configuration for one table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Target table
    pub table: TableId,
    /// Show the filter input
    pub filter: bool,
    /// Show the page-length selector
    pub length_change: bool,
    /// Enable pagination
    pub paginate: bool,
    /// Enable column sorting
    pub sortable: bool,
    /// Show the row-count summary
    pub info: bool,
    /// Rows per page
    pub page_size: usize,
    /// How long a user-chosen page size is remembered
    pub page_size_ttl: Duration,
    /// Per-column overrides
    pub columns: Vec<ColumnDef>,
    /// Remote page fetching, when the table is remotely fed
    pub remote: Option<RemoteConfig>,
}

impl WidgetConfig {
    /// Derive the configuration for a declared table.
    pub fn from_declaration(decl: &TableDeclaration, vocab: &ClassVocabulary) -> Self {
        let caps = decl.capabilities(vocab);
        let remote = match decl.kind(vocab) {
            TableKind::Remote { endpoint } => Some(RemoteConfig { endpoint }),
            TableKind::Local => None,
        };
        let columns = decl
            .columns
            .iter()
            .map(|col| ColumnDef {
                index: col.index,
                sortable: caps.sortable && !col.non_sortable(vocab),
                numeric_formatted: col.formatted_num(vocab),
            })
            .collect();

        Self {
            table: decl.id.clone(),
            filter: caps.filter,
            length_change: caps.length_change,
            paginate: caps.paginate,
            sortable: caps.sortable,
            info: !caps.hide_info,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_ttl: Duration::from_secs(PAGE_SIZE_TTL_SECS),
            columns,
            remote,
        }
    }

    /// Whether the widget should fetch pages remotely
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColumnDeclaration;

    #[test]
    fn test_config_from_local_declaration() {
        let vocab = ClassVocabulary::default();
        let decl = TableDeclaration::new("samples", ["filter", "sortable", "paginate"]);
        let config = WidgetConfig::from_declaration(&decl, &vocab);
        assert!(config.filter);
        assert!(config.sortable);
        assert!(config.paginate);
        assert!(config.info);
        assert!(!config.is_remote());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.page_size_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn test_config_from_remote_declaration_with_columns() {
        let vocab = ClassVocabulary::default();
        let decl = TableDeclaration::new("samples", ["serverside", "sortable", "hideInfo"])
            .with_endpoint("/samples/data")
            .with_column(ColumnDeclaration::new(0, Vec::<String>::new()))
            .with_column(ColumnDeclaration::new(1, ["nonsortable"]))
            .with_column(ColumnDeclaration::new(2, ["formatted-num"]));
        let config = WidgetConfig::from_declaration(&decl, &vocab);

        assert!(!config.info);
        assert_eq!(
            config.remote,
            Some(RemoteConfig {
                endpoint: "/samples/data".into()
            })
        );
        assert_eq!(
            config.columns,
            vec![
                ColumnDef {
                    index: 0,
                    sortable: true,
                    numeric_formatted: false
                },
                ColumnDef {
                    index: 1,
                    sortable: false,
                    numeric_formatted: false
                },
                ColumnDef {
                    index: 2,
                    sortable: true,
                    numeric_formatted: true
                },
            ]
        );
    }

    #[test]
    fn test_columns_not_sortable_when_table_is_not() {
        let vocab = ClassVocabulary::default();
        let decl = TableDeclaration::new("samples", ["paginate"])
            .with_column(ColumnDeclaration::new(0, Vec::<String>::new()));
        let config = WidgetConfig::from_declaration(&decl, &vocab);
        assert!(!config.columns[0].sortable);
    }
}
