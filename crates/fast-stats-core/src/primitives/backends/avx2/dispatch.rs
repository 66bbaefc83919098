//! Compile-time dispatch system for AVX2 type-specific implementations
//!
//! This module provides the trait for zero-overhead type dispatch
//! using operation-centric modules and stable Rust features.

use super::ops::{Accumulate, PackedAccumulate};
use super::Avx2Backend;
use crate::moments::Moments;
use crate::numeric::Sample;

/// Trait for type-specific AVX2 dispatch
///
/// This trait is implemented for each supported sample type, allowing
/// compile-time dispatch to type-specific implementations.
pub trait Avx2TypeDispatch: Sample + Accumulate<Self> + PackedAccumulate<Self> {
    fn simd_width() -> usize {
        Self::lanes(256)
    }

    unsafe fn sum_impl(backend: &Avx2Backend, data: &[Self]) -> f64 {
        <Self as Accumulate<Self>>::sum(backend, data)
    }

    unsafe fn moments_impl(backend: &Avx2Backend, data: &[Self]) -> Moments {
        <Self as Accumulate<Self>>::moments(backend, data)
    }

    unsafe fn packed_sums_impl(backend: &Avx2Backend, group: &[Self], out: &mut [f64]) {
        <Self as PackedAccumulate<Self>>::packed_sums(backend, group, out)
    }

    unsafe fn packed_moments_impl(backend: &Avx2Backend, group: &[Self], out: &mut [Moments]) {
        <Self as PackedAccumulate<Self>>::packed_moments(backend, group, out)
    }
}

impl Avx2TypeDispatch for f32 {}

impl Avx2TypeDispatch for f64 {}
