//! Record data holders
//!
//! Link mappings, parent references, drafts of records to write, and the
//! builder that fills drafts from result rows through field setters.

mod builder;
mod draft;
mod link;
mod parent;
mod pricing;

pub use builder::RecordBuilder;
pub use draft::{RecordDraft, NEW_RECORD_PREFIX};
pub use link::LinkInfoField;
pub use parent::ParentLink;
pub use pricing::PricedRecord;
