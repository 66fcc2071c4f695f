//! Link field mapping

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::FilterOp;
use crate::result::FieldId;

/// How a value on a source record maps onto a linked record's field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkInfoField {
    /// Field read on the source record
    pub field_id: FieldId,
    /// Field written on the linked record
    pub target_field_id: FieldId,
    /// Source value that triggers the mapping
    pub source_value: Value,
    /// Value written to the target field
    pub target_value: Value,
}

impl LinkInfoField {
    pub fn new(
        field_id: FieldId,
        target_field_id: FieldId,
        source_value: Value,
        target_value: Value,
    ) -> Self {
        Self {
            field_id,
            target_field_id,
            source_value,
            target_value,
        }
    }

    /// True when `value` equals the source value, without type coercion
    pub fn maps(&self, value: &Value) -> bool {
        FilterOp::Eq(self.source_value.clone()).matches(value)
    }
}
