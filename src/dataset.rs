//! Shape validation for caller datasets
//!
//! A dataset is any ordered collection of ordered `f64` sequences. Every
//! entry point validates it here before materializing a buffer, so invalid
//! input never produces partial results.

use fast_stats_core::{Error, Result};

/// Validated dimensions of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Sample count per variable, in dataset order
    pub lengths: Vec<usize>,
}

impl Shape {
    pub fn num_variables(&self) -> usize {
        self.lengths.len()
    }

    /// Common sample count, if every variable has the same length
    pub fn rows(&self) -> Option<usize> {
        let first = *self.lengths.first()?;
        self.lengths.iter().all(|&n| n == first).then_some(first)
    }
}

/// Check the dataset invariants
///
/// Rejects an empty dataset and empty variables; when `equal_lengths` is set
/// (packed layouts) every variable must match the first one's length.
pub fn validate<V: AsRef<[f64]>>(dataset: &[V], equal_lengths: bool) -> Result<Shape> {
    if dataset.is_empty() {
        return Err(Error::empty_dataset());
    }

    let lengths: Vec<usize> = dataset.iter().map(|v| v.as_ref().len()).collect();
    if let Some(index) = lengths.iter().position(|&n| n == 0) {
        return Err(Error::empty_variable(index));
    }

    if equal_lengths {
        let expected = lengths[0];
        if let Some((index, &actual)) = lengths.iter().enumerate().find(|&(_, &n)| n != expected) {
            return Err(Error::length_mismatch(index, expected, actual));
        }
    }

    Ok(Shape { lengths })
}
