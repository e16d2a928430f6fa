//! Brute-force search for the hash multiplier constant.
//!
//! The analyst suspects the enemy chose `A` near the golden-ratio fraction
//! (the classic multiplicative-hashing recommendation). The search samples
//! a closed interval at evenly spaced points and keeps the sample closest
//! to the reference constant.
//!
//! The scan is intentionally naive: every sample is evaluated, there is no
//! early exit, and ties go to the first minimal sample encountered. That
//! makes the result a pure deterministic function of the parameters.

use crate::error::{EstimatorError, Result};

/// The golden-ratio fractional constant, the classic multiplicative-hash
/// multiplier.
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_7;

/// Parameters of the constant search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSearch {
    /// Number of evenly spaced samples, endpoints included
    pub sample_count: usize,
    /// Lower interval bound
    pub low: f64,
    /// Upper interval bound
    pub high: f64,
    /// Reference constant the samples are compared against
    pub reference: f64,
}

impl ConstantSearch {
    /// The historical search: 200 samples of `[0.60, 0.63]` against the
    /// golden-ratio fraction.
    pub fn golden_ratio() -> Self {
        Self {
            sample_count: 200,
            low: 0.60,
            high: 0.63,
            reference: GOLDEN_RATIO_FRACTION,
        }
    }

    /// Sample value at index `i`: `low + (high - low) * i / (sample_count - 1)`.
    fn sample(&self, i: usize) -> f64 {
        self.low + (self.high - self.low) * i as f64 / (self.sample_count - 1) as f64
    }

    /// Scan all samples and return the one with minimum absolute distance
    /// to `reference`. First minimal sample in ascending index order wins.
    ///
    /// # Errors
    /// - [`EstimatorError::TooFewSamples`] if `sample_count < 2`
    /// - [`EstimatorError::InvalidInterval`] if `low > high`
    pub fn run(&self) -> Result<f64> {
        if self.sample_count < 2 {
            return Err(EstimatorError::TooFewSamples(self.sample_count).into());
        }
        if self.low > self.high {
            return Err(EstimatorError::InvalidInterval {
                low: self.low,
                high: self.high,
            }
            .into());
        }

        let mut best = self.low;
        let mut best_error = f64::MAX;

        for i in 0..self.sample_count {
            let candidate = self.sample(i);
            let error = (candidate - self.reference).abs();
            if error < best_error {
                best_error = error;
                best = candidate;
            }
        }

        Ok(best)
    }
}

impl Default for ConstantSearch {
    fn default() -> Self {
        Self::golden_ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_included() {
        let search = ConstantSearch::golden_ratio();
        assert_eq!(search.sample(0), 0.60);
        assert_eq!(search.sample(search.sample_count - 1), 0.63);
    }

    #[test]
    fn test_historical_search_result() {
        // Closest of the 200 samples to 0.6180339887 is index 120.
        let search = ConstantSearch::golden_ratio();
        let best = search.run().unwrap();
        let expected = 0.60 + (0.63 - 0.60) * 120.0 / 199.0;
        assert!((best - expected).abs() < 1e-12);
    }

    #[test]
    fn test_result_minimizes_distance_over_all_samples() {
        let search = ConstantSearch::golden_ratio();
        let best = search.run().unwrap();
        let best_error = (best - search.reference).abs();

        for i in 0..search.sample_count {
            let error = (search.sample(i) - search.reference).abs();
            assert!(best_error <= error, "sample {i} beats the reported best");
        }
    }

    #[test]
    fn test_deterministic() {
        let search = ConstantSearch::golden_ratio();
        assert_eq!(search.run().unwrap(), search.run().unwrap());
    }

    #[test]
    fn test_reference_inside_interval_tie_to_first() {
        // Reference exactly halfway between two adjacent samples: the
        // strictly-less-than comparison keeps the earlier one.
        let search = ConstantSearch {
            sample_count: 3,
            low: 0.0,
            high: 1.0,
            reference: 0.25,
        };
        assert_eq!(search.run().unwrap(), 0.0);
    }

    #[test]
    fn test_too_few_samples_rejected() {
        let search = ConstantSearch {
            sample_count: 1,
            ..ConstantSearch::golden_ratio()
        };
        assert!(search.run().is_err());
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let search = ConstantSearch {
            low: 0.63,
            high: 0.60,
            ..ConstantSearch::golden_ratio()
        };
        assert!(search.run().is_err());
    }
}
