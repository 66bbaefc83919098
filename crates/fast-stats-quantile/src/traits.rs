//! Core traits for quantile estimation

use crate::{Error, Result};
use fast_stats_core::Sample;
use std::cmp::Ordering;

/// Main trait for quantile estimation
///
/// Estimators work on sorted order statistics. The unsorted entry points sort
/// a private copy, so the caller's samples are never reordered.
pub trait QuantileEstimator {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted<T: Sample>(&self, sorted_data: &[T], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    fn quantile<T: Sample>(&self, data: &[T], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        let sorted = sorted_copy(data)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted<T: Sample>(&self, sorted_data: &[T], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate multiple quantiles, sorting once
    fn quantiles<T: Sample>(&self, data: &[T], ps: &[f64]) -> Result<Vec<f64>> {
        for &p in ps {
            Error::check_probability(p)?;
        }
        let sorted = sorted_copy(data)?;
        self.quantiles_sorted(&sorted, ps)
    }
}

/// Sort a copy of `data` ascending
///
/// Incomparable values (NaN) compare equal, so their position is unspecified.
pub fn sorted_copy<T: Sample>(data: &[T]) -> Result<Vec<T>> {
    Error::check_non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(sorted)
}
