//! Linear interpolation between order statistics (Hyndman & Fan type 7)
//!
//! For sorted length `n` and probability `p` the rank is `h = p * (n - 1)`;
//! the estimate is `x[floor(h)] + (x[floor(h) + 1] - x[floor(h)]) * (h - floor(h))`.
//! `p = 1` returns the last order statistic directly.

use crate::traits::QuantileEstimator;
use crate::{Error, Result};
use fast_stats_core::Sample;
use tracing::trace;

/// R-7 quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    pub fn new() -> Self {
        Self
    }

    /// Percentile of pre-sorted data, `pct` in `[0, 100]`
    pub fn percentile_sorted<T: Sample>(&self, sorted_data: &[T], pct: f64) -> Result<f64> {
        self.quantile_sorted(sorted_data, pct / 100.0)
    }

    /// Percentile of unsorted data, `pct` in `[0, 100]`
    pub fn percentile<T: Sample>(&self, data: &[T], pct: f64) -> Result<f64> {
        self.quantile(data, pct / 100.0)
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn quantile_sorted<T: Sample>(&self, sorted_data: &[T], p: f64) -> Result<f64> {
        Error::check_non_empty(sorted_data)?;
        Error::check_probability(p)?;

        let len = sorted_data.len();
        let last = sorted_data[len - 1].widen();
        if p == 1.0 {
            return Ok(last);
        }

        let rank = p * (len - 1) as f64;
        let lower_index = rank.floor() as usize;
        let lower = sorted_data[lower_index].widen();
        if lower_index + 1 >= len {
            return Ok(lower);
        }
        let upper = sorted_data[lower_index + 1].widen();
        let value = lower + (upper - lower) * (rank - rank.floor());

        trace!(p, len, rank, value, "interpolated quantile");
        Ok(value)
    }
}
