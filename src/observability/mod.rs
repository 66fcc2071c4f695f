//! Observability for the filtering layer
//!
//! - Structured JSON logging with typed events
//! - Relaxed atomic counters
//!
//! Observability is read-only: nothing here influences which rows a
//! filter keeps.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{FilterMetrics, FilterMetricsSnapshot};

/// Log a typed event with fields
pub fn log_event(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}

