//! Result subsystem
//!
//! Positional access to tabular query results and the cached, filtered
//! view built on top of them.
//!
//! # Pieces
//!
//! - [`ResultSet`]: the result contract (row count, indexed rows, backing
//!   representation accessors)
//! - [`QueryResult`]: a result backed by either a raw [`ServerResponse`] or
//!   a materialized [`RecordSet`], fixed at construction
//! - [`Row`]: a borrowed view of one record
//! - [`ResultPointer`]: `(field_index, record_index)` address of a value
//! - [`CachedResult`]: rows of a base result that satisfied a condition
//!
//! # Errors
//!
//! - Index outside `0..len` for rows or fields: `IndexOutOfRange`
//! - Accessor for the inactive representation: `InvalidState`

mod cached;
mod errors;
mod meta;
mod pointer;
mod result;
mod row;
mod storage;

pub use cached::CachedResult;
pub use errors::{IndexKind, ResultError, ResultSetResult};
pub use meta::{FieldDescriptor, FieldId, MetaInfo};
pub use pointer::ResultPointer;
pub use result::{QueryResult, Representation, ResultSet, Rows};
pub use row::Row;
pub use storage::{Record, RecordSet, ServerResponse};
