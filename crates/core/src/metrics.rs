//! Timing and counters for the analysis run.
//!
//! The only measured phase is the tree build: the clock starts when the
//! metrics are created and stops at `complete()`. Timing uses the
//! monotonic `Instant` clock, so wall-clock adjustments cannot produce
//! negative durations.
//!
//! # Thread Safety
//!
//! `AnalysisMetrics` is NOT thread-safe; the analysis is single-threaded
//! and updates the struct from one execution path.

use std::time::{Duration, Instant};

/// Counters and timing for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisMetrics {
    /// When the tree build started
    pub start_time: Instant,

    /// When the tree build ended (set on completion)
    pub end_time: Option<Instant>,

    /// Symbols fed into the tree (counting repeats)
    pub symbols_inserted: u64,

    /// Distinct symbols in the tree
    pub distinct_symbols: u64,
}

impl AnalysisMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            symbols_inserted: 0,
            distinct_symbols: 0,
        }
    }

    /// Mark the build as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Build duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Build duration in milliseconds with fractional precision, ready for
    /// the `%.3f ms` report line.
    pub fn build_duration_ms(&self) -> f64 {
        self.duration().as_secs_f64() * 1000.0
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "build_ms={:.3}\n\
             symbols_inserted={}\n\
             distinct_symbols={}\n",
            self.build_duration_ms(),
            self.symbols_inserted,
            self.distinct_symbols,
        )
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = AnalysisMetrics::new();
        assert!(metrics.end_time.is_none());
        assert!(metrics.duration().as_millis() < 100); // Should be recent
    }

    #[test]
    fn test_duration_frozen_after_complete() {
        let mut metrics = AnalysisMetrics::new();
        metrics.complete();
        let first = metrics.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(metrics.duration(), first);
    }

    #[test]
    fn test_build_duration_ms_nonnegative() {
        let mut metrics = AnalysisMetrics::new();
        metrics.complete();
        assert!(metrics.build_duration_ms() >= 0.0);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = AnalysisMetrics::new();
        metrics.symbols_inserted = 40;
        metrics.distinct_symbols = 13;
        metrics.complete();

        let text = metrics.export_text();
        assert!(text.contains("symbols_inserted=40"));
        assert!(text.contains("distinct_symbols=13"));
        assert!(text.contains("build_ms="));
    }
}
