//! First quartile, median and third quartile in one sort

use crate::linear::LinearInterpolation;
use crate::traits::{sorted_copy, QuantileEstimator};
use crate::Result;
use fast_stats_core::Sample;

/// The 25th, 50th and 75th percentiles of one variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Quartiles of pre-sorted data
    pub fn from_sorted<T: Sample>(sorted_data: &[T]) -> Result<Self> {
        let est = LinearInterpolation::new();
        Ok(Self {
            q1: est.percentile_sorted(sorted_data, 25.0)?,
            median: est.percentile_sorted(sorted_data, 50.0)?,
            q3: est.percentile_sorted(sorted_data, 75.0)?,
        })
    }

    /// Quartiles of unsorted data; sorts a private copy
    pub fn compute<T: Sample>(data: &[T]) -> Result<Self> {
        let sorted = sorted_copy(data)?;
        Self::from_sorted(&sorted)
    }

    /// Spread between the third and first quartile
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Median of unsorted data
pub fn median<T: Sample>(data: &[T]) -> Result<f64> {
    LinearInterpolation::new().quantile(data, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_variable() {
        let data = [0.6374f64, 0.0500, 0.5651, 0.3710];
        let q = Quartiles::compute(&data[..]).unwrap();
        // sorted: 0.0500 0.3710 0.5651 0.6374
        assert_abs_diff_eq!(q.q1, 0.0500 + (0.3710 - 0.0500) * 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(q.median, (0.3710 + 0.5651) / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.q3, 0.5651 + (0.6374 - 0.5651) * 0.25, epsilon = 1e-12);
        assert!(q.q1 <= q.median && q.median <= q.q3);
        assert_abs_diff_eq!(median(&data[..]).unwrap(), q.median, epsilon = 1e-15);
    }

    #[test]
    fn test_odd_length() {
        let q = Quartiles::compute(&[5.0f32, 1.0, 3.0, 2.0, 4.0][..]).unwrap();
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.median, 3.0);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.iqr(), 2.0);
    }
}
