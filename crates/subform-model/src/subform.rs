//! Subform records: a named, ordered group of fields.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::Field;

/// A named, ordered collection of fields.
///
/// `field_count` is always derived from `fields`, both on construction and
/// when a persisted record is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubformRecord")]
pub struct Subform {
    name: String,
    field_count: usize,
    fields: Vec<Field>,
}

/// Persisted shape, tolerant of missing members.
#[derive(Deserialize)]
struct SubformRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: Vec<Field>,
}

impl From<SubformRecord> for Subform {
    fn from(record: SubformRecord) -> Self {
        Subform::new(record.name, record.fields)
    }
}

impl Subform {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            field_count: fields.len(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Checks the name and every field's options invariant.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        self.fields.iter().try_for_each(Field::validate)
    }
}
