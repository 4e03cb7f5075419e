//! Form export
//!
//! Materializes a table's selection as hidden form fields on a POST
//! submission. An empty selection aborts the submission so the caller can
//! surface a message to the user instead of posting nothing.

use std::sync::Arc;

use crate::constants::DEFAULT_EMPTY_EXPORT_MESSAGE;
use crate::error::{Error, Result};

/// A single name/value form field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    /// Field name
    pub name: Arc<str>,
    /// Field value
    pub value: String,
}

impl FormField {
    /// Create a new field
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The selection of one table, flattened for submission
#[derive(Clone, Debug, Default)]
pub struct ExportPayload {
    fields: Vec<FormField>,
}

impl ExportPayload {
    /// Wrap a field list
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// The exported fields, in export order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of exported fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Consume the payload into its fields
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}

/// HTTP method of a prepared submission
///
/// Always POST: a selection can span arbitrarily many rows, which does not
/// fit a query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Post,
}

/// A form ready to submit
#[derive(Clone, Debug)]
pub struct PreparedForm {
    /// Submission method
    pub method: FormMethod,
    /// Action URL override; None keeps the form's own action
    pub action: Option<String>,
    /// Hidden fields to attach, replacing any previously attached set
    pub fields: Vec<FormField>,
}

/// Build a submission from an export payload, or abort when it is empty.
///
/// The field set is rebuilt from scratch on every attempt; a caller that
/// attached fields from an earlier attempt must drop them first. On an
/// empty payload the returned error carries `empty_message` (or a default)
/// for the caller to surface.
pub fn prepare_submission(
    payload: ExportPayload,
    action: Option<&str>,
    empty_message: Option<&str>,
) -> Result<PreparedForm> {
    if payload.is_empty() {
        return Err(Error::EmptyExport {
            message: empty_message
                .unwrap_or(DEFAULT_EMPTY_EXPORT_MESSAGE)
                .to_string(),
        });
    }

    Ok(PreparedForm {
        method: FormMethod::Post,
        action: action.filter(|a| !a.is_empty()).map(str::to_string),
        fields: payload.into_fields(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_aborts_with_message() {
        let err = prepare_submission(ExportPayload::default(), None, Some("Pick a sample first"))
            .expect_err("empty export must abort");
        match err {
            Error::EmptyExport { message } => assert_eq!(message, "Pick a sample first"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_payload_uses_default_message() {
        let err = prepare_submission(ExportPayload::default(), None, None)
            .expect_err("empty export must abort");
        assert_eq!(err.to_string(), DEFAULT_EMPTY_EXPORT_MESSAGE);
    }

    #[test]
    fn test_prepared_form_posts_with_action_override() {
        let payload = ExportPayload::new(vec![FormField::new("ids", "3")]);
        let form = prepare_submission(payload, Some("/samples/delete"), None).expect("form");
        assert_eq!(form.method, FormMethod::Post);
        assert_eq!(form.action.as_deref(), Some("/samples/delete"));
        assert_eq!(form.fields, vec![FormField::new("ids", "3")]);
    }

    #[test]
    fn test_blank_action_keeps_form_action() {
        let payload = ExportPayload::new(vec![FormField::new("ids", "3")]);
        let form = prepare_submission(payload, Some(""), None).expect("form");
        assert_eq!(form.action, None);
    }
}
