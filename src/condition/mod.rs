//! Condition subsystem
//!
//! Boolean predicate trees evaluated per row.
//!
//! # Semantics
//!
//! - `Always` matches every row
//! - AND of an empty list is true
//! - OR of an empty or absent list is false
//! - NOT negates its single operand
//!
//! Composition (`and`, `or`, `negate`) returns a new tree; operands are
//! shared, never modified.

mod condition;
mod errors;
mod predicate;

pub use condition::{Condition, RowPredicate};
pub use errors::{ConditionError, ConditionResult};
pub use predicate::{FieldPredicate, FilterOp};
