//! Single-pass moment accumulation
//!
//! `Moments` is the scalar accumulator every backend reduces into: sample
//! count, sum, sum of squares and running extrema. Vector backends build one
//! from their horizontally reduced lanes and fold any scalar tail into it with
//! [`Moments::push`] or [`Moments::merge`], so every strategy finishes through
//! the same [`Moments::finalize`] arithmetic.

use crate::numeric::Sample;
use crate::{Error, Result};

/// Partial statistics over a run of samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub count: usize,
    pub sum: f64,
    pub sum_sq: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for Moments {
    fn default() -> Self {
        Self::new()
    }
}

impl Moments {
    /// Empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Build from already reduced totals
    pub fn from_parts(count: usize, sum: f64, sum_sq: f64, min: f64, max: f64) -> Self {
        Self {
            count,
            sum,
            sum_sq,
            min,
            max,
        }
    }

    /// Accumulate every sample of `data`
    pub fn from_slice<T: Sample>(data: &[T]) -> Self {
        let mut acc = Self::new();
        acc.extend(data);
        acc
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    #[inline]
    pub fn extend<T: Sample>(&mut self, data: &[T]) {
        for &x in data {
            self.push(x.widen());
        }
    }

    /// Fold another partial accumulator into this one
    pub fn merge(&mut self, other: &Moments) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean of the accumulated samples
    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(Error::no_samples("mean"));
        }
        Ok(self.sum / self.count as f64)
    }

    /// Finish the pass: population variance `E[x²] - E[x]²` and its square root
    ///
    /// Identical extrema mean every sample was equal, which pins the variance
    /// to exactly zero instead of a rounding residue.
    pub fn finalize(&self) -> Result<Summary> {
        let mean = self.mean()?;
        let n = self.count as f64;
        let variance = if self.min == self.max {
            0.0
        } else {
            (self.sum_sq / n - mean * mean).max(0.0)
        };

        Ok(Summary {
            min: self.min,
            max: self.max,
            mean,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }
}

/// Final per-variable statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

/// Reference single-pass statistics over one variable
///
/// Fails with [`Error::InvalidInput`] when `data` is empty.
pub fn scalar_summary<T: Sample>(data: &[T]) -> Result<Summary> {
    Moments::from_slice(data).finalize()
}
