//! Condition error types
//!
//! Error codes:
//! - CRM_CONDITION_FIELD_ACCESS
//! - CRM_CONDITION_PREDICATE_FAILED

use thiserror::Error;

use crate::result::ResultError;

/// Errors raised by leaf predicates
///
/// Composition nodes never produce these themselves; they pass leaf
/// errors through unchanged.
#[derive(Debug, Clone, Error)]
pub enum ConditionError {
    /// The leaf could not read the value it tests
    #[error("field access failed: {0}")]
    Field(#[from] ResultError),

    /// A caller-supplied predicate reported a failure
    #[error("predicate failed: {0}")]
    Predicate(String),
}

impl ConditionError {
    pub fn predicate(reason: impl Into<String>) -> Self {
        ConditionError::Predicate(reason.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConditionError::Field(_) => "CRM_CONDITION_FIELD_ACCESS",
            ConditionError::Predicate(_) => "CRM_CONDITION_PREDICATE_FAILED",
        }
    }
}

/// Result type for condition evaluation
pub type ConditionResult<T> = Result<T, ConditionError>;
