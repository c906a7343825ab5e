//! Partial field updates.

use serde_json::Value;
use std::collections::BTreeMap;

/// A set-only partial update.
///
/// Only the named fields are touched; omitting a field never clears it.
/// The update timestamp is refreshed by the store on every application, so
/// callers do not set it themselves. The identifier field is immutable and
/// rejected at apply time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdates {
    fields: BTreeMap<String, Value>,
}

impl FieldUpdates {
    /// An empty update set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to a new value. Repeating a field keeps the last value.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// True when no fields would be touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the update names `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}
