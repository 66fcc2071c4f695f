//! Output column resolvers

use serde::{Deserialize, Serialize};

use crate::record::LinkInfoField;
use crate::result::FieldId;

use super::field::Field;

/// Decides which concrete field supplies an output column's value.
///
/// Resolution never fails; a setter with nothing to bind resolves to
/// [`Field::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSetterField {
    /// Column with no source binding
    Plain { result_position: usize },
    /// Column copied from `field_id` of the target info-area
    Source {
        result_position: usize,
        field_id: FieldId,
    },
    /// Column resolved through a link mapping
    Link {
        result_position: usize,
        link: LinkInfoField,
    },
}

impl FieldSetterField {
    pub fn plain(result_position: usize) -> Self {
        FieldSetterField::Plain { result_position }
    }

    pub fn source(result_position: usize, field_id: FieldId) -> Self {
        FieldSetterField::Source {
            result_position,
            field_id,
        }
    }

    pub fn link(result_position: usize, link: LinkInfoField) -> Self {
        FieldSetterField::Link {
            result_position,
            link,
        }
    }

    /// Output column this setter is attached to
    pub fn result_position(&self) -> usize {
        match self {
            FieldSetterField::Plain { result_position }
            | FieldSetterField::Source {
                result_position, ..
            }
            | FieldSetterField::Link {
                result_position, ..
            } => *result_position,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, FieldSetterField::Link { .. })
    }

    pub fn is_field(&self) -> bool {
        matches!(self, FieldSetterField::Source { .. })
    }

    /// Concrete field bound for records of `info_area_id`
    pub fn field_with_info_area(&self, info_area_id: &str) -> Field {
        match self {
            FieldSetterField::Plain { .. } => Field::empty(info_area_id),
            FieldSetterField::Source { field_id, .. } => Field::new(*field_id, info_area_id),
            FieldSetterField::Link { link, .. } => Field::new(link.target_field_id, info_area_id),
        }
    }
}
