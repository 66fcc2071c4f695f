//! Builds record drafts from result rows
//!
//! Each setter resolves its output column against the target info-area;
//! empty bindings are skipped, link setters write their mapped target
//! value only when the source value matches, and every other binding
//! copies the row value at the setter's result position.

use crate::field::FieldSetterField;
use crate::result::{ResultSet, ResultSetResult, Row};

use super::draft::RecordDraft;
use super::parent::ParentLink;

/// Turns source rows into drafts for `info_area_id`
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    info_area_id: String,
    setters: Vec<FieldSetterField>,
    parent_link_id: Option<i32>,
}

impl RecordBuilder {
    pub fn new(info_area_id: impl Into<String>, setters: Vec<FieldSetterField>) -> Self {
        Self {
            info_area_id: info_area_id.into(),
            setters,
            parent_link_id: None,
        }
    }

    /// Links every draft to its source row's record via `link_id`
    pub fn with_parent_link(mut self, link_id: i32) -> Self {
        self.parent_link_id = Some(link_id);
        self
    }

    pub fn setters(&self) -> &[FieldSetterField] {
        &self.setters
    }

    /// Draft for one source row
    ///
    /// Fails with an index error if a bound setter points past the row.
    pub fn build(&self, row: &Row<'_>) -> ResultSetResult<RecordDraft> {
        let mut draft = RecordDraft::new_record(self.info_area_id.as_str());

        if let Some(link_id) = self.parent_link_id {
            if let Some(parent) = ParentLink::from_row(row, link_id) {
                draft = draft.with_parent(parent);
            }
        }

        for setter in &self.setters {
            let field = setter.field_with_info_area(&self.info_area_id);
            if field.is_empty() {
                continue;
            }

            let value = row.value(setter.result_position())?;
            match setter {
                FieldSetterField::Link { link, .. } => {
                    if link.maps(value) {
                        draft.set(field, link.target_value.clone());
                    }
                }
                _ => draft.set(field, value.clone()),
            }
        }

        Ok(draft)
    }

    /// One draft per row of `result`, in row order
    pub fn build_all<R: ResultSet + ?Sized>(
        &self,
        result: &R,
    ) -> ResultSetResult<Vec<RecordDraft>> {
        (0..result.row_count())
            .map(|index| self.build(&result.row_at(index)?))
            .collect()
    }
}
