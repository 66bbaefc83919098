//! Scalar backend implementation
//!
//! This backend provides the reference implementations that work for every
//! sample type without using any SIMD instructions. The free functions are
//! shared with the vector backends as their fallback paths.

use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::ComputePrimitives;

/// Scalar backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Sample> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}

/// Scalar implementation of sum
pub fn sum_scalar<T: Sample>(data: &[T]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x.widen())
}

/// Scalar implementation of per-lane sums over an interleaved group
pub fn packed_sums_scalar<T: Sample>(group: &[T], lanes: usize, out: &mut [f64]) {
    debug_assert!(lanes > 0 && group.len() % lanes == 0);
    debug_assert!(out.len() >= lanes);

    let out = &mut out[..lanes];
    out.iter_mut().for_each(|s| *s = 0.0);
    for row in group.chunks_exact(lanes) {
        for (acc, &x) in out.iter_mut().zip(row) {
            *acc += x.widen();
        }
    }
}

/// Scalar implementation of per-lane moments over an interleaved group
pub fn packed_moments_scalar<T: Sample>(group: &[T], lanes: usize, out: &mut [Moments]) {
    debug_assert!(lanes > 0 && group.len() % lanes == 0);
    debug_assert!(out.len() >= lanes);

    let out = &mut out[..lanes];
    out.iter_mut().for_each(|m| *m = Moments::new());
    for row in group.chunks_exact(lanes) {
        for (acc, &x) in out.iter_mut().zip(row) {
            acc.push(x.widen());
        }
    }
}
