//! Error types for the cryptanalysis demo.
//!
//! All operations return structured errors rather than panicking.
//! The surface is small on purpose: the frequency tree and the hash
//! calculators are total over their inputs, so the only fallible pieces
//! are the constant estimator and the application configuration.

use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Constant estimator was configured with an unusable parameter set
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Command-line configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Constant-search configuration errors.
///
/// The sample step divides by `sample_count - 1`, so fewer than two samples
/// is rejected, as is a reversed interval.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Fewer than two samples cannot span a closed interval
    #[error("need at least 2 samples to span the interval, got {0}")]
    TooFewSamples(usize),

    /// Interval bounds are reversed
    #[error("invalid search interval: low {low} > high {high}")]
    InvalidInterval { low: f64, high: f64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
