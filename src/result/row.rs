//! Row view into a query result

use std::fmt;

use serde_json::Value;

use super::errors::{ResultError, ResultSetResult};
use super::meta::{FieldId, MetaInfo};
use super::pointer::ResultPointer;
use super::result::{QueryResult, Representation};

/// A positional view of one record inside a [`QueryResult`].
///
/// Rows own no data; they borrow the result storage, so the borrow checker
/// keeps them from outliving it. `record_index` is always the index in the
/// backing storage, also for rows handed out by a
/// [`CachedResult`](super::CachedResult).
#[derive(Clone, Copy)]
pub struct Row<'a> {
    result: &'a QueryResult,
    record_index: usize,
}

impl<'a> Row<'a> {
    pub(crate) fn new(result: &'a QueryResult, record_index: usize) -> Self {
        Self {
            result,
            record_index,
        }
    }

    /// Index of the record in the backing storage
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    pub fn meta_info(&self) -> &'a MetaInfo {
        self.result.meta_info_ref()
    }

    /// Number of field slots present in this record
    pub fn field_count(&self) -> usize {
        match self.result.representation() {
            Representation::ServerResponse(response) => response.field_count(self.record_index),
            Representation::RecordSet(set) => set
                .get(self.record_index)
                .map_or(0, |record| record.values.len()),
        }
    }

    /// Pointer to a field slot of this record
    pub fn pointer(&self, field_index: usize) -> ResultPointer {
        ResultPointer::new(field_index, self.record_index)
    }

    /// Value at `field_index`
    ///
    /// Fails with an index error when the record has no such slot.
    pub fn value(&self, field_index: usize) -> ResultSetResult<&'a Value> {
        let found = match self.result.representation() {
            Representation::ServerResponse(response) => {
                response.value_at(self.pointer(field_index))
            }
            Representation::RecordSet(set) => set
                .get(self.record_index)
                .and_then(|record| record.values.get(field_index)),
        };
        found.ok_or_else(|| ResultError::field_index(field_index, self.field_count()))
    }

    /// Value of the column bound to `(info_area_id, field_id)`, if the
    /// layout has one and this record carries it
    pub fn value_for_field(&self, info_area_id: &str, field_id: FieldId) -> Option<&'a Value> {
        let position = self.meta_info().position_of(info_area_id, field_id)?;
        self.value(position).ok()
    }

    /// Record id; only materialized records carry one
    pub fn record_id(&self) -> Option<&'a str> {
        match self.result.representation() {
            Representation::ServerResponse(_) => None,
            Representation::RecordSet(set) => set
                .get(self.record_index)
                .map(|record| record.record_id.as_str()),
        }
    }
}

impl fmt::Debug for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("info_area_id", &self.meta_info().info_area_id)
            .field("record_index", &self.record_index)
            .finish()
    }
}
