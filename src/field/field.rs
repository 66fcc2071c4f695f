//! Concrete field bindings

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::FieldId;

/// A field of an info-area, or the empty binding for that info-area
///
/// The empty binding (`field_id == None`) means "nothing to set".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    field_id: Option<FieldId>,
    info_area_id: String,
}

impl Field {
    pub fn new(field_id: FieldId, info_area_id: impl Into<String>) -> Self {
        Self {
            field_id: Some(field_id),
            info_area_id: info_area_id.into(),
        }
    }

    /// The "no value to set" binding scoped to `info_area_id`
    pub fn empty(info_area_id: impl Into<String>) -> Self {
        Self {
            field_id: None,
            info_area_id: info_area_id.into(),
        }
    }

    pub fn field_id(&self) -> Option<FieldId> {
        self.field_id
    }

    pub fn info_area_id(&self) -> &str {
        &self.info_area_id
    }

    pub fn is_empty(&self) -> bool {
        self.field_id.is_none()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field_id {
            Some(id) => write!(f, "{}.{}", self.info_area_id, id),
            None => write!(f, "{}.<empty>", self.info_area_id),
        }
    }
}
