//! Positional addressing into raw result storage

use std::fmt;

/// Locates one field value inside a result before a [`Row`](super::Row)
/// wrapper is built.
///
/// Pure value: two indices, compared and hashed as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultPointer {
    field_index: usize,
    record_index: usize,
}

impl ResultPointer {
    pub const fn new(field_index: usize, record_index: usize) -> Self {
        Self {
            field_index,
            record_index,
        }
    }

    pub const fn field_index(&self) -> usize {
        self.field_index
    }

    pub const fn record_index(&self) -> usize {
        self.record_index
    }

    /// Same record, another field
    pub const fn with_field(&self, field_index: usize) -> Self {
        Self::new(field_index, self.record_index)
    }
}

impl fmt::Display for ResultPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.field_index, self.record_index)
    }
}
