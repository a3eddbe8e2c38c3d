//! Filter run metrics with a rolling average.
//!
//! Counts how filter runs ended (completed, cancelled, failed) and keeps a
//! bounded window of completion times for the status footer. A global
//! collector is available through [`global_filter_metrics`], since every run
//! records to the same place.

use instant::Instant;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Window size for the rolling average (5 minutes).
const WINDOW_SECS: u64 = 300;

/// Maximum samples to keep (prevents unbounded growth).
const MAX_SAMPLES: usize = 256;

/// A single completion time with timestamp.
#[derive(Clone, Debug)]
struct TimingSample {
    timestamp: Instant,
    duration_ms: f64,
}

#[derive(Debug, Default)]
struct MetricsInner {
    samples: VecDeque<TimingSample>,
    completed: u64,
    cancelled: u64,
    failed: u64,
    last_ms: Option<f64>,
}

impl MetricsInner {
    fn rolling_avg(&self, window: Duration) -> Option<f64> {
        // checked_sub: on WASM Instant starts at page load
        let cutoff = Instant::now().checked_sub(window);

        let (sum, count) = self
            .samples
            .iter()
            .filter(|s| cutoff.is_none_or(|c| s.timestamp >= c))
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.duration_ms, count + 1));

        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }
}

/// Point-in-time view of the collected metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterMetricsSnapshot {
    pub completed: u64,
    pub cancelled: u64,
    pub failed: u64,
    /// Duration of the most recent completed run (ms)
    pub last_ms: Option<f64>,
    /// Average completed-run duration over the window (ms)
    pub rolling_avg_ms: Option<f64>,
}

/// Thread-safe filter metrics collector.
#[derive(Clone)]
pub struct FilterMetrics {
    inner: Arc<RwLock<MetricsInner>>,
    window: Duration,
}

impl FilterMetrics {
    pub fn new() -> Self {
        Self::with_window(WINDOW_SECS)
    }

    /// Collector with a custom rolling window (for testing).
    pub fn with_window(window_secs: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsInner::default())),
            window: Duration::from_secs(window_secs),
        }
    }

    /// Record a completed run and its duration.
    pub fn record_completed(&self, duration_ms: f64) {
        if let Ok(mut inner) = self.inner.write() {
            inner.completed += 1;
            inner.last_ms = Some(duration_ms);
            inner.samples.push_back(TimingSample {
                timestamp: Instant::now(),
                duration_ms,
            });
            while inner.samples.len() > MAX_SAMPLES {
                inner.samples.pop_front();
            }
        }
    }

    /// Record a run that was superseded before it finished.
    pub fn record_cancelled(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.cancelled += 1;
        }
    }

    /// Record a run that failed.
    pub fn record_failed(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failed += 1;
        }
    }

    pub fn snapshot(&self) -> FilterMetricsSnapshot {
        match self.inner.read() {
            Ok(inner) => FilterMetricsSnapshot {
                completed: inner.completed,
                cancelled: inner.cancelled,
                failed: inner.failed,
                last_ms: inner.last_ms,
                rolling_avg_ms: inner.rolling_avg(self.window),
            },
            Err(_) => FilterMetricsSnapshot::default(),
        }
    }
}

impl Default for FilterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_FILTER_METRICS: Lazy<FilterMetrics> = Lazy::new(FilterMetrics::new);

/// Get the global filter metrics collector.
pub fn global_filter_metrics() -> &'static FilterMetrics {
    &GLOBAL_FILTER_METRICS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = FilterMetrics::new().snapshot();
        assert_eq!(snapshot, FilterMetricsSnapshot::default());
    }

    #[test]
    fn test_record_outcomes() {
        let metrics = FilterMetrics::with_window(60);
        metrics.record_completed(10.0);
        metrics.record_completed(30.0);
        metrics.record_cancelled();
        metrics.record_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.completed, 2);
        assert_eq!(snapshot.cancelled, 1);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.last_ms, Some(30.0));
        assert!((snapshot.rolling_avg_ms.unwrap() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_samples_are_bounded() {
        let metrics = FilterMetrics::with_window(60);
        for i in 0..(MAX_SAMPLES + 10) {
            metrics.record_completed(i as f64);
        }
        let inner = metrics.inner.read().unwrap();
        assert_eq!(inner.samples.len(), MAX_SAMPLES);
        assert_eq!(inner.completed, (MAX_SAMPLES + 10) as u64);
    }

    #[test]
    fn test_clones_share_storage() {
        let metrics = FilterMetrics::new();
        let clone = metrics.clone();
        clone.record_cancelled();
        assert_eq!(metrics.snapshot().cancelled, 1);
    }
}
