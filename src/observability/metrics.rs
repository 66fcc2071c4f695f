//! Filtering counters
//!
//! - Counters only, monotonic
//! - Relaxed atomics; a registry can be shared across threads by reference

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters describing cached-result materialization
#[derive(Debug, Default)]
pub struct FilterMetrics {
    cached_results_built: AtomicU64,
    rows_scanned: AtomicU64,
    rows_matched: AtomicU64,
    filters_rejected: AtomicU64,
}

impl FilterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed materialization
    pub fn record_build(&self, scanned: usize, matched: usize) {
        self.cached_results_built.fetch_add(1, Ordering::Relaxed);
        self.rows_scanned.fetch_add(scanned as u64, Ordering::Relaxed);
        self.rows_matched.fetch_add(matched as u64, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.filters_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cached_results_built(&self) -> u64 {
        self.cached_results_built.load(Ordering::Relaxed)
    }

    pub fn rows_scanned(&self) -> u64 {
        self.rows_scanned.load(Ordering::Relaxed)
    }

    pub fn rows_matched(&self) -> u64 {
        self.rows_matched.load(Ordering::Relaxed)
    }

    pub fn filters_rejected(&self) -> u64 {
        self.filters_rejected.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> FilterMetricsSnapshot {
        FilterMetricsSnapshot {
            cached_results_built: self.cached_results_built(),
            rows_scanned: self.rows_scanned(),
            rows_matched: self.rows_matched(),
            filters_rejected: self.filters_rejected(),
        }
    }
}

/// Plain copy of [`FilterMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterMetricsSnapshot {
    pub cached_results_built: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub filters_rejected: u64,
}

impl FilterMetricsSnapshot {
    /// Fraction of scanned rows that matched, 0.0 when nothing was scanned
    pub fn selectivity(&self) -> f64 {
        if self.rows_scanned == 0 {
            0.0
        } else {
            self.rows_matched as f64 / self.rows_scanned as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = FilterMetrics::new();
        assert_eq!(metrics.snapshot(), FilterMetricsSnapshot::default());
    }

    #[test]
    fn test_record_build() {
        let metrics = FilterMetrics::new();
        metrics.record_build(10, 4);
        metrics.record_build(6, 0);
        metrics.increment_rejected();

        let snap = metrics.snapshot();
        assert_eq!(snap.cached_results_built, 2);
        assert_eq!(snap.rows_scanned, 16);
        assert_eq!(snap.rows_matched, 4);
        assert_eq!(snap.filters_rejected, 1);
        assert!((snap.selectivity() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = FilterMetrics::new();
        metrics.record_build(2, 1);
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["rows_matched"], 1);
    }
}
