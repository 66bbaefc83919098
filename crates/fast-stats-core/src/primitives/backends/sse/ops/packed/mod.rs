//! Packed-group accumulation for the SSE backend

mod f32;
mod f64;

use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::backends::sse::SseBackend;

/// Trait for packed-group accumulation
pub trait PackedAccumulate<T: Sample> {
    unsafe fn packed_sums(backend: &SseBackend, group: &[T], out: &mut [f64]);

    unsafe fn packed_moments(backend: &SseBackend, group: &[T], out: &mut [Moments]);
}

impl PackedAccumulate<f32> for f32 {
    unsafe fn packed_sums(backend: &SseBackend, group: &[f32], out: &mut [f64]) {
        f32::packed_sums_f32(backend, group, out)
    }

    unsafe fn packed_moments(backend: &SseBackend, group: &[f32], out: &mut [Moments]) {
        f32::packed_moments_f32(backend, group, out)
    }
}

impl PackedAccumulate<f64> for f64 {
    unsafe fn packed_sums(backend: &SseBackend, group: &[f64], out: &mut [f64]) {
        f64::packed_sums_f64(backend, group, out)
    }

    unsafe fn packed_moments(backend: &SseBackend, group: &[f64], out: &mut [Moments]) {
        f64::packed_moments_f64(backend, group, out)
    }
}
