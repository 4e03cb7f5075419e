//! Table declaration surface
//!
//! Hosts declare a table's behaviour through classes on the table element
//! and its column headers. The class names themselves are a configurable
//! vocabulary so that hosts with a different markup convention can map
//! their own names onto the same capabilities.

use serde::Deserialize;

use crate::domain::table::TableId;

/// Class names used to interpret table declarations
///
/// The defaults match the historical markup. A host using different class
/// names supplies its own vocabulary, typically deserialized from config.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassVocabulary {
    /// Enables the filter input
    pub filter: String,
    /// Enables the page-length selector
    pub length_change: String,
    /// Enables clickable column sorting
    pub sortable: String,
    /// Enables pagination
    pub paginate: String,
    /// Hides the row-count summary
    pub hide_info: String,
    /// Marks a table whose pages are fetched from a remote endpoint
    pub remote: String,
    /// Column marker: exclude the column from sorting
    pub non_sortable: String,
    /// Column marker: sort numerically despite formatted cell text
    pub formatted_num: String,
}

impl Default for ClassVocabulary {
    fn default() -> Self {
        Self {
            filter: "filter".into(),
            length_change: "length_change".into(),
            sortable: "sortable".into(),
            paginate: "paginate".into(),
            hide_info: "hideInfo".into(),
            remote: "serverside".into(),
            non_sortable: "nonsortable".into(),
            formatted_num: "formatted-num".into(),
        }
    }
}

/// Feature toggles derived from a table declaration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableCapabilities {
    pub filter: bool,
    pub length_change: bool,
    pub sortable: bool,
    pub paginate: bool,
    pub hide_info: bool,
}

/// How a table gets its rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// All rows rendered up front; pagination only toggles visibility
    Local,
    /// Pages fetched on demand from an endpoint
    Remote {
        /// Endpoint answering page queries
        endpoint: String,
    },
}

/// Column-level declaration (header classes)
#[derive(Clone, Debug, Default)]
pub struct ColumnDeclaration {
    /// Zero-based column index
    pub index: usize,
    /// Classes on the column header
    pub classes: Vec<String>,
}

impl ColumnDeclaration {
    /// Create a declaration for a column with the given header classes
    pub fn new(index: usize, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            index,
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the column is excluded from sorting
    pub fn non_sortable(&self, vocab: &ClassVocabulary) -> bool {
        self.classes.iter().any(|c| *c == vocab.non_sortable)
    }

    /// Whether the column sorts numerically over formatted cell text
    pub fn formatted_num(&self, vocab: &ClassVocabulary) -> bool {
        self.classes.iter().any(|c| *c == vocab.formatted_num)
    }
}

/// A table instance as declared in the host markup
#[derive(Clone, Debug)]
pub struct TableDeclaration {
    /// Table identifier (the element id)
    pub id: TableId,
    /// Classes on the table element
    pub classes: Vec<String>,
    /// Remote endpoint, when declared
    pub remote_endpoint: Option<String>,
    /// Column header declarations
    pub columns: Vec<ColumnDeclaration>,
}

impl TableDeclaration {
    /// Create a declaration with the given id and table classes
    pub fn new(
        id: impl Into<TableId>,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            remote_endpoint: None,
            columns: Vec::new(),
        }
    }

    /// Set the remote endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.remote_endpoint = Some(endpoint.into());
        self
    }

    /// Add a column declaration
    pub fn with_column(mut self, column: ColumnDeclaration) -> Self {
        self.columns.push(column);
        self
    }

    /// Whether the table element carries a class
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Derive the capability toggles under a vocabulary
    pub fn capabilities(&self, vocab: &ClassVocabulary) -> TableCapabilities {
        TableCapabilities {
            filter: self.has_class(&vocab.filter),
            length_change: self.has_class(&vocab.length_change),
            sortable: self.has_class(&vocab.sortable),
            paginate: self.has_class(&vocab.paginate),
            hide_info: self.has_class(&vocab.hide_info),
        }
    }

    /// Derive the table kind under a vocabulary.
    ///
    /// A remote marker without an endpoint falls back to Local: assuming no
    /// cross-page state is the safe reading of an incomplete declaration.
    pub fn kind(&self, vocab: &ClassVocabulary) -> TableKind {
        if !self.has_class(&vocab.remote) {
            return TableKind::Local;
        }
        match &self.remote_endpoint {
            Some(endpoint) => TableKind::Remote {
                endpoint: endpoint.clone(),
            },
            None => {
                tracing::warn!(
                    "{}: remote marker without an endpoint, treating table as local",
                    self.id
                );
                TableKind::Local
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_from_default_vocabulary() {
        let vocab = ClassVocabulary::default();
        let decl = TableDeclaration::new("t1", ["filter", "paginate", "hideInfo"]);
        let caps = decl.capabilities(&vocab);
        assert!(caps.filter);
        assert!(caps.paginate);
        assert!(caps.hide_info);
        assert!(!caps.length_change);
        assert!(!caps.sortable);
    }

    #[test]
    fn test_kind_remote_with_endpoint() {
        let vocab = ClassVocabulary::default();
        let decl =
            TableDeclaration::new("t1", ["serverside"]).with_endpoint("/table/data");
        assert_eq!(
            decl.kind(&vocab),
            TableKind::Remote {
                endpoint: "/table/data".into()
            }
        );
    }

    #[test]
    fn test_kind_defaults_to_local() {
        let vocab = ClassVocabulary::default();
        // No remote marker at all.
        let plain = TableDeclaration::new("t1", ["paginate"]);
        assert_eq!(plain.kind(&vocab), TableKind::Local);
        // Remote marker but no endpoint: incomplete declaration, local wins.
        let incomplete = TableDeclaration::new("t2", ["serverside"]);
        assert_eq!(incomplete.kind(&vocab), TableKind::Local);
    }

    #[test]
    fn test_custom_vocabulary_maps_same_capabilities() {
        let vocab: ClassVocabulary = toml::from_str(
            r#"
            filter = "searchable"
            remote = "ajax"
            "#,
        )
        .expect("vocabulary from config");
        let decl = TableDeclaration::new("t1", ["searchable", "ajax"]).with_endpoint("/d");
        assert!(decl.capabilities(&vocab).filter);
        assert!(matches!(decl.kind(&vocab), TableKind::Remote { .. }));
        // Unlisted names keep their defaults.
        assert_eq!(vocab.paginate, "paginate");
    }

    #[test]
    fn test_column_markers() {
        let vocab = ClassVocabulary::default();
        let col = ColumnDeclaration::new(2, ["nonsortable", "formatted-num"]);
        assert!(col.non_sortable(&vocab));
        assert!(col.formatted_num(&vocab));
        let plain = ColumnDeclaration::new(0, Vec::<String>::new());
        assert!(!plain.non_sortable(&vocab));
    }
}
