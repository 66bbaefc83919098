//! Compile-time dispatch for SSE type-specific implementations

use super::ops::{Accumulate, PackedAccumulate};
use super::SseBackend;
use crate::moments::Moments;
use crate::numeric::Sample;

/// Trait for type-specific SSE dispatch
pub trait SseTypeDispatch: Sample + Accumulate<Self> + PackedAccumulate<Self> {
    fn simd_width() -> usize {
        Self::lanes(128)
    }

    unsafe fn sum_impl(backend: &SseBackend, data: &[Self]) -> f64 {
        <Self as Accumulate<Self>>::sum(backend, data)
    }

    unsafe fn moments_impl(backend: &SseBackend, data: &[Self]) -> Moments {
        <Self as Accumulate<Self>>::moments(backend, data)
    }

    unsafe fn packed_sums_impl(backend: &SseBackend, group: &[Self], out: &mut [f64]) {
        <Self as PackedAccumulate<Self>>::packed_sums(backend, group, out)
    }

    unsafe fn packed_moments_impl(backend: &SseBackend, group: &[Self], out: &mut [Moments]) {
        <Self as PackedAccumulate<Self>>::packed_moments(backend, group, out)
    }
}

impl SseTypeDispatch for f32 {}

impl SseTypeDispatch for f64 {}
