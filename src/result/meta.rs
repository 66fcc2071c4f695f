//! Result layout descriptor
//!
//! Supplied by the query layer alongside every result. The filtering core
//! only uses it to translate `(info_area, field_id)` into a field position.

use serde::{Deserialize, Serialize};

/// Numeric field identifier within an info-area
pub type FieldId = i32;

/// One output column of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Info-area the field belongs to
    pub info_area_id: String,
    /// Field id within that info-area
    pub field_id: FieldId,
}

impl FieldDescriptor {
    pub fn new(info_area_id: impl Into<String>, field_id: FieldId) -> Self {
        Self {
            info_area_id: info_area_id.into(),
            field_id,
        }
    }
}

/// Field and info-area layout of a result
///
/// The position of a descriptor in `fields` is the field index used by
/// rows and result pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInfo {
    /// Info-area the result's records belong to
    pub info_area_id: String,
    /// Column layout in field-index order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl MetaInfo {
    pub fn new(info_area_id: impl Into<String>) -> Self {
        Self {
            info_area_id: info_area_id.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a column
    pub fn with_field(mut self, info_area_id: impl Into<String>, field_id: FieldId) -> Self {
        self.fields.push(FieldDescriptor::new(info_area_id, field_id));
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Position of the first column matching `(info_area_id, field_id)`
    pub fn position_of(&self, info_area_id: &str, field_id: FieldId) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.field_id == field_id && f.info_area_id == info_area_id)
    }
}
