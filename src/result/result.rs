//! The result contract and its concrete query-backed implementation

use crate::observability::{log_event, Event, Severity};

use super::errors::{ResultError, ResultSetResult};
use super::meta::MetaInfo;
use super::row::Row;
use super::storage::{RecordSet, ServerResponse};

/// Positional, read-only access to a tabular result.
///
/// Implemented by [`QueryResult`] and [`CachedResult`](super::CachedResult);
/// downstream code accepts any implementer.
pub trait ResultSet {
    /// Layout descriptor of the result's columns
    fn meta_info(&self) -> &MetaInfo;

    fn row_count(&self) -> usize;

    /// Row at `index`, an index error outside `0..row_count()`
    fn row_at(&self, index: usize) -> ResultSetResult<Row<'_>>;

    /// Whether the raw server response backs this result
    fn is_server_result(&self) -> bool;

    /// Raw server payload; invalid state for record-set results
    fn server_response(&self) -> ResultSetResult<&ServerResponse>;

    /// Materialized records; invalid state for server results
    fn record_set(&self) -> ResultSetResult<&RecordSet>;

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Iterates rows in index order
    fn rows(&self) -> Rows<'_, Self> {
        Rows {
            result: self,
            next: 0,
        }
    }
}

/// Iterator over the rows of a [`ResultSet`]
pub struct Rows<'a, R: ?Sized> {
    result: &'a R,
    next: usize,
}

impl<'a, R: ResultSet + ?Sized> Iterator for Rows<'a, R> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.result;
        let row = result.row_at(self.next).ok()?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.row_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

/// Which storage backs a [`QueryResult`]
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    ServerResponse(ServerResponse),
    RecordSet(RecordSet),
}

/// Result produced by the query layer
///
/// The representation is chosen at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    meta_info: MetaInfo,
    representation: Representation,
}

impl QueryResult {
    pub fn from_server_response(meta_info: MetaInfo, response: ServerResponse) -> Self {
        Self {
            meta_info,
            representation: Representation::ServerResponse(response),
        }
    }

    pub fn from_record_set(meta_info: MetaInfo, records: RecordSet) -> Self {
        Self {
            meta_info,
            representation: Representation::RecordSet(records),
        }
    }

    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    pub(crate) fn meta_info_ref(&self) -> &MetaInfo {
        &self.meta_info
    }

    fn mismatch(&self, requested: &str) -> ResultError {
        let active = match self.representation {
            Representation::ServerResponse(_) => "server_response",
            Representation::RecordSet(_) => "record_set",
        };
        log_event(
            Severity::Trace,
            Event::RepresentationMismatch,
            &[("active", active), ("requested", requested)],
        );
        ResultError::invalid_state(format!(
            "{} requested from a {} result",
            requested, active
        ))
    }
}

impl ResultSet for QueryResult {
    fn meta_info(&self) -> &MetaInfo {
        &self.meta_info
    }

    fn row_count(&self) -> usize {
        match &self.representation {
            Representation::ServerResponse(response) => response.record_count(),
            Representation::RecordSet(set) => set.len(),
        }
    }

    fn row_at(&self, index: usize) -> ResultSetResult<Row<'_>> {
        let len = self.row_count();
        if index >= len {
            return Err(ResultError::row_index(index, len));
        }
        Ok(Row::new(self, index))
    }

    fn is_server_result(&self) -> bool {
        matches!(self.representation, Representation::ServerResponse(_))
    }

    fn server_response(&self) -> ResultSetResult<&ServerResponse> {
        match &self.representation {
            Representation::ServerResponse(response) => Ok(response),
            Representation::RecordSet(_) => Err(self.mismatch("server_response")),
        }
    }

    fn record_set(&self) -> ResultSetResult<&RecordSet> {
        match &self.representation {
            Representation::RecordSet(set) => Ok(set),
            Representation::ServerResponse(_) => Err(self.mismatch("record_set")),
        }
    }
}
