//! Editable record drafts

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::field::Field;

use super::parent::ParentLink;

/// Prefix of temporary ids handed to records not yet stored
pub const NEW_RECORD_PREFIX: &str = "new:";

/// A record being assembled for writing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDraft {
    info_area_id: String,
    record_id: String,
    parent: Option<ParentLink>,
    values: Vec<(Field, Value)>,
}

impl RecordDraft {
    /// Draft for a new record with a temporary id
    pub fn new_record(info_area_id: impl Into<String>) -> Self {
        Self::existing(
            info_area_id,
            format!("{}{}", NEW_RECORD_PREFIX, Uuid::new_v4()),
        )
    }

    /// Draft editing the stored record `record_id`
    pub fn existing(info_area_id: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            info_area_id: info_area_id.into(),
            record_id: record_id.into(),
            parent: None,
            values: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: ParentLink) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn info_area_id(&self) -> &str {
        &self.info_area_id
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn parent(&self) -> Option<&ParentLink> {
        self.parent.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.record_id.starts_with(NEW_RECORD_PREFIX)
    }

    /// Assigns `value` to `field`, replacing an earlier assignment
    pub fn set(&mut self, field: Field, value: Value) {
        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((field, value)),
        }
    }

    pub fn value_of(&self, field: &Field) -> Option<&Value> {
        self.values
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v)
    }

    /// Assignments in first-set order
    pub fn values(&self) -> &[(Field, Value)] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
