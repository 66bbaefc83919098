//! Contiguous accumulation for the AVX2 backend
//!
//! Reduces one variable's samples to sum, sum of squares and extrema.

mod f32;
mod f64;

use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::backends::avx2::Avx2Backend;

/// Trait for contiguous accumulation
pub trait Accumulate<T: Sample> {
    /// Sum of all elements
    unsafe fn sum(backend: &Avx2Backend, data: &[T]) -> f64;

    /// Full moment set of all elements
    unsafe fn moments(backend: &Avx2Backend, data: &[T]) -> Moments;
}

impl Accumulate<f32> for f32 {
    unsafe fn sum(backend: &Avx2Backend, data: &[f32]) -> f64 {
        f32::sum_f32(backend, data)
    }

    unsafe fn moments(backend: &Avx2Backend, data: &[f32]) -> Moments {
        f32::moments_f32(backend, data)
    }
}

impl Accumulate<f64> for f64 {
    unsafe fn sum(backend: &Avx2Backend, data: &[f64]) -> f64 {
        f64::sum_f64(backend, data)
    }

    unsafe fn moments(backend: &Avx2Backend, data: &[f64]) -> Moments {
        f64::moments_f64(backend, data)
    }
}
