//! crmquery - narrowing fetched CRM query results without re-querying
//!
//! # Subsystems
//!
//! - `result`: positional result access and cached, filtered views
//! - `condition`: AND / OR / NOT predicate trees over rows
//! - `field`: output column to concrete field resolution
//! - `record`: drafts, links and parent references built from rows
//! - `config`: filtering configuration
//! - `observability`: structured logging and counters
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use crmquery::condition::Condition;
//! use crmquery::result::{CachedResult, ResultSet};
//!
//! let active = Condition::field_eq(1, json!("A"));
//! let cached = CachedResult::new(Arc::new(result), &active.negate())?;
//! for row in cached.rows() {
//!     // ...
//! }
//! ```

pub mod condition;
pub mod config;
pub mod field;
pub mod observability;
pub mod record;
pub mod result;
