//! Result error types
//!
//! Error codes:
//! - CRM_RESULT_INDEX_OUT_OF_RANGE
//! - CRM_RESULT_INVALID_STATE
//! - CRM_RESULT_CONDITION_FAILED
//! - CRM_RESULT_CONDITION_TOO_DEEP

use thiserror::Error;

use crate::condition::ConditionError;

/// What an out-of-range index was addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Row position within a result
    Row,
    /// Field position within a row
    Field,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Row => "row",
            IndexKind::Field => "field",
        }
    }
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by result access and cached filtering
#[derive(Debug, Clone, Error)]
pub enum ResultError {
    /// Row or field index outside `0..len`
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    /// Wrong backing representation requested, or a malformed payload
    #[error("invalid result state: {0}")]
    InvalidState(String),

    /// A leaf condition failed while materializing a cached result
    #[error("condition failed: {0}")]
    Condition(Box<ConditionError>),

    /// Condition tree exceeds the configured depth bound
    #[error("condition depth exceeds maximum {max}")]
    ConditionTooDeep { max: usize },
}

impl ResultError {
    /// Row index error
    pub fn row_index(index: usize, len: usize) -> Self {
        ResultError::IndexOutOfRange {
            kind: IndexKind::Row,
            index,
            len,
        }
    }

    /// Field index error
    pub fn field_index(index: usize, len: usize) -> Self {
        ResultError::IndexOutOfRange {
            kind: IndexKind::Field,
            index,
            len,
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        ResultError::InvalidState(reason.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ResultError::IndexOutOfRange { .. } => "CRM_RESULT_INDEX_OUT_OF_RANGE",
            ResultError::InvalidState(_) => "CRM_RESULT_INVALID_STATE",
            ResultError::Condition(_) => "CRM_RESULT_CONDITION_FAILED",
            ResultError::ConditionTooDeep { .. } => "CRM_RESULT_CONDITION_TOO_DEEP",
        }
    }

    /// Returns true for index errors
    pub fn is_index_error(&self) -> bool {
        matches!(self, ResultError::IndexOutOfRange { .. })
    }

    /// Returns true for representation/state errors
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ResultError::InvalidState(_))
    }
}

impl From<ConditionError> for ResultError {
    fn from(err: ConditionError) -> Self {
        ResultError::Condition(Box::new(err))
    }
}

/// Result type for result operations
pub type ResultSetResult<T> = Result<T, ResultError>;
