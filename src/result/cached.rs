//! Cached, filtered view of a result
//!
//! A [`CachedResult`] evaluates its condition against every base row once,
//! at construction, and keeps the positions of the rows that matched.
//! Afterwards it is read exactly like any other [`ResultSet`]; row access
//! is a direct index into the retained positions.

use std::sync::Arc;

use crate::condition::Condition;
use crate::config::FilterConfig;
use crate::observability::{log_event, Event, FilterMetrics, Logger, Severity};

use super::errors::{ResultError, ResultSetResult};
use super::meta::MetaInfo;
use super::result::{QueryResult, ResultSet};
use super::row::Row;
use super::storage::{RecordSet, ServerResponse};

/// Snapshot of the base rows that satisfied a condition, in base order
#[derive(Debug)]
pub struct CachedResult<R: ResultSet = QueryResult> {
    base: Arc<R>,
    positions: Vec<usize>,
}

impl<R: ResultSet> CachedResult<R> {
    /// Filters `base` by `condition`
    ///
    /// Fails with the first leaf error raised while scanning.
    pub fn new(base: Arc<R>, condition: &Condition) -> ResultSetResult<Self> {
        Self::build(base, condition, None, None)
    }

    /// Like [`CachedResult::new`], recording the scan in `metrics`
    pub fn with_metrics(
        base: Arc<R>,
        condition: &Condition,
        metrics: &FilterMetrics,
    ) -> ResultSetResult<Self> {
        Self::build(base, condition, None, Some(metrics))
    }

    /// Like [`CachedResult::with_metrics`], also enforcing `config`
    ///
    /// Trees deeper than `max_condition_depth` are refused before any row
    /// is read.
    pub fn with_config(
        base: Arc<R>,
        condition: &Condition,
        config: &FilterConfig,
        metrics: &FilterMetrics,
    ) -> ResultSetResult<Self> {
        Self::build(base, condition, Some(config), Some(metrics))
    }

    fn build(
        base: Arc<R>,
        condition: &Condition,
        config: Option<&FilterConfig>,
        metrics: Option<&FilterMetrics>,
    ) -> ResultSetResult<Self> {
        if let Some(config) = config {
            if condition.exceeds_depth(config.max_condition_depth) {
                let err = ResultError::ConditionTooDeep {
                    max: config.max_condition_depth,
                };
                Self::reject(&err, metrics);
                return Err(err);
            }
        }

        let scanned = base.row_count();
        let mut positions = Vec::new();
        for position in 0..scanned {
            let row = base.row_at(position)?;
            match condition.check(&row) {
                Ok(true) => positions.push(position),
                Ok(false) => {}
                Err(err) => {
                    let err = ResultError::from(err);
                    Self::reject(&err, metrics);
                    return Err(err);
                }
            }
        }

        if let Some(metrics) = metrics {
            metrics.record_build(scanned, positions.len());
        }

        let severity = config.map_or(Severity::Trace, FilterConfig::materialization_severity);
        if Logger::enabled(severity) {
            let base_rows = scanned.to_string();
            let matched = positions.len().to_string();
            let rendered = condition.to_string();
            log_event(
                severity,
                Event::CachedResultBuilt,
                &[
                    ("base_rows", base_rows.as_str()),
                    ("condition", rendered.as_str()),
                    ("info_area", base.meta_info().info_area_id.as_str()),
                    ("matched_rows", matched.as_str()),
                ],
            );
        }

        Ok(Self { base, positions })
    }

    fn reject(err: &ResultError, metrics: Option<&FilterMetrics>) {
        if let Some(metrics) = metrics {
            metrics.increment_rejected();
        }
        let reason = err.to_string();
        log_event(
            Severity::Warn,
            Event::CachedResultRejected,
            &[("code", err.code()), ("reason", reason.as_str())],
        );
    }

    /// The unfiltered result this view was built from
    pub fn base(&self) -> &Arc<R> {
        &self.base
    }

    /// Base row positions retained, ascending
    pub fn base_positions(&self) -> &[usize] {
        &self.positions
    }
}

impl<R: ResultSet> ResultSet for CachedResult<R> {
    fn meta_info(&self) -> &MetaInfo {
        self.base.meta_info()
    }

    fn row_count(&self) -> usize {
        self.positions.len()
    }

    fn row_at(&self, index: usize) -> ResultSetResult<Row<'_>> {
        let position = self
            .positions
            .get(index)
            .copied()
            .ok_or_else(|| ResultError::row_index(index, self.positions.len()))?;
        self.base.row_at(position)
    }

    fn is_server_result(&self) -> bool {
        self.base.is_server_result()
    }

    fn server_response(&self) -> ResultSetResult<&ServerResponse> {
        self.base.server_response()
    }

    fn record_set(&self) -> ResultSetResult<&RecordSet> {
        self.base.record_set()
    }
}
