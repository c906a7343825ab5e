//! Field-equality filters.

use profile_model::fields;
use profile_types::DocumentId;
use serde_json::Value;
use std::collections::BTreeMap;

/// A conjunction of field-equality predicates.
///
/// A document matches when every named field is present and equal to the
/// expected value. Equality is exact JSON-value equality on top-level
/// keys; no other operators exist at this layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, Value>,
}

impl Filter {
    /// An empty filter; matches every document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The point-lookup filter `{_id: id}`.
    #[must_use]
    pub fn by_id(id: DocumentId) -> Self {
        Self::new().eq(fields::ID, id)
    }

    /// Adds an equality predicate. Repeating a field replaces the
    /// previous expectation.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// True when no predicates have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the document satisfies every predicate.
    #[must_use]
    pub fn matches(&self, doc: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// When the filter is exactly `{_id: <hex>}`, the id string.
    /// Point lookups take the keyed path instead of a collection scan.
    pub(crate) fn id_only(&self) -> Option<&str> {
        if self.fields.len() != 1 {
            return None;
        }
        self.fields.get(fields::ID).and_then(Value::as_str)
    }
}
