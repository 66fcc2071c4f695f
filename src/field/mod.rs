//! Field resolution
//!
//! [`FieldSetterField`] tells record-building code which concrete
//! [`Field`] an output column binds to for a given info-area.

mod field;
mod setter;

pub use field::Field;
pub use setter::FieldSetterField;
