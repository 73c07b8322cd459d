#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::{BTreeMap, HashMap};

use crate::net::types::FieldMessages;
use crate::state::fields::Field;

/// Per-field validation messages from the last rejected submission.
///
/// A field with an entry here renders as invalid until the user edits that
/// field or a new submission attempt starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, Vec<String>>,
}

impl FieldErrors {
    /// Replaces the entire mapping with the errors from a rejected submission.
    pub fn set_all(&mut self, errors: FieldErrors) {
        self.entries = errors.entries;
    }

    /// Removes the entry for one field. Called whenever that field is edited.
    pub fn clear(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    /// Empties the mapping. Called at the start of every submission attempt.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// The messages for one field, if any.
    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.entries.get(&field).map(Vec::as_slice)
    }

    /// Display form for one field: messages joined with `", "`.
    pub fn message(&self, field: Field) -> Option<String> {
        self.entries.get(&field).map(|msgs| msgs.join(", "))
    }

    /// Whether the field should render as invalid.
    pub fn has(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the error map from the wire shape. Unknown field keys and empty
/// message lists are dropped rather than surfaced.
impl From<HashMap<String, FieldMessages>> for FieldErrors {
    fn from(wire: HashMap<String, FieldMessages>) -> Self {
        let mut errors = FieldErrors::default();
        for (key, messages) in wire {
            let Some(field) = Field::parse(&key) else {
                continue;
            };
            let messages = messages.into_vec();
            if !messages.is_empty() {
                errors.entries.insert(field, messages);
            }
        }
        errors
    }
}
