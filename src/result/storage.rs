//! Backing storage for query results
//!
//! A result is backed either by the raw server response (records are
//! JSON arrays, values are reached lazily through a [`ResultPointer`]) or
//! by an already-materialized [`RecordSet`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ResultError, ResultSetResult};
use super::pointer::ResultPointer;

/// Raw server payload, one JSON array per record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerResponse {
    records: Vec<Value>,
}

impl ServerResponse {
    /// Wraps already-decoded raw records
    ///
    /// Every record must be a JSON array.
    pub fn new(records: Vec<Value>) -> ResultSetResult<Self> {
        if let Some(pos) = records.iter().position(|r| !r.is_array()) {
            return Err(ResultError::invalid_state(format!(
                "server record {} is not an array",
                pos
            )));
        }
        Ok(Self { records })
    }

    /// Accepts a decoded payload of shape `[[...], [...], ...]`
    pub fn from_json(payload: Value) -> ResultSetResult<Self> {
        match payload {
            Value::Array(records) => Self::new(records),
            other => Err(ResultError::invalid_state(format!(
                "server response must be an array, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of field slots in one record
    pub fn field_count(&self, record_index: usize) -> usize {
        self.records
            .get(record_index)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Value addressed by `pointer`, `None` if either index is out of range
    pub fn value_at(&self, pointer: ResultPointer) -> Option<&Value> {
        self.records
            .get(pointer.record_index())?
            .as_array()?
            .get(pointer.field_index())
    }
}

/// A materialized record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identification within its info-area
    pub record_id: String,
    /// Field values in field-index order
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(record_id: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            record_id: record_id.into(),
            values,
        }
    }
}

/// Ordered materialized records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_response_value_at() {
        let response = ServerResponse::from_json(json!([["a", 1], ["b", 2, true]])).unwrap();

        assert_eq!(response.record_count(), 2);
        assert_eq!(response.field_count(1), 3);
        assert_eq!(
            response.value_at(ResultPointer::new(1, 1)),
            Some(&json!(2))
        );
        assert_eq!(response.value_at(ResultPointer::new(2, 0)), None);
        assert_eq!(response.value_at(ResultPointer::new(0, 5)), None);
    }

    #[test]
    fn test_server_response_rejects_non_array() {
        let err = ServerResponse::from_json(json!({"rows": []})).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(err.to_string().contains("object"));

        let err = ServerResponse::new(vec![json!(["ok"]), json!("bad")]).unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_record_set_collect() {
        let set: RecordSet = (0..3)
            .map(|i| Record::new(format!("r{}", i), vec![json!(i)]))
            .collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(2).map(|r| r.record_id.as_str()), Some("r2"));
        assert!(set.get(3).is_none());
    }
}
