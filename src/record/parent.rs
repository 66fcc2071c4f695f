//! Hierarchical record references

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::Row;

/// Reference from a record to its parent record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentLink {
    /// Info-area of the parent
    pub info_area_id: String,
    /// Parent record id within its info-area
    pub record_id: String,
    /// Link id used when several links connect the same info-areas
    pub link_id: i32,
}

impl ParentLink {
    pub fn new(
        info_area_id: impl Into<String>,
        record_id: impl Into<String>,
        link_id: i32,
    ) -> Self {
        Self {
            info_area_id: info_area_id.into(),
            record_id: record_id.into(),
            link_id,
        }
    }

    /// Reference to the record behind `row`
    ///
    /// `None` for rows without a record id (raw server rows).
    pub fn from_row(row: &Row<'_>, link_id: i32) -> Option<Self> {
        let info_area_id = row.meta_info().info_area_id.as_str();
        let record_id = row.record_id()?;
        let bare = record_id
            .strip_prefix(info_area_id)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(record_id);
        Some(Self::new(info_area_id, bare, link_id))
    }

    /// `"<info_area>.<record_id>"`
    pub fn identification(&self) -> String {
        format!("{}.{}", self.info_area_id, self.record_id)
    }
}

impl fmt::Display for ParentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.identification(), self.link_id)
    }
}
