//! Contiguous accumulation for the SSE backend

mod f32;
mod f64;

use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::backends::sse::SseBackend;

/// Trait for contiguous accumulation
pub trait Accumulate<T: Sample> {
    unsafe fn sum(backend: &SseBackend, data: &[T]) -> f64;

    unsafe fn moments(backend: &SseBackend, data: &[T]) -> Moments;
}

impl Accumulate<f32> for f32 {
    unsafe fn sum(backend: &SseBackend, data: &[f32]) -> f64 {
        f32::sum_f32(backend, data)
    }

    unsafe fn moments(backend: &SseBackend, data: &[f32]) -> Moments {
        f32::moments_f32(backend, data)
    }
}

impl Accumulate<f64> for f64 {
    unsafe fn sum(backend: &SseBackend, data: &[f64]) -> f64 {
        f64::sum_f64(backend, data)
    }

    unsafe fn moments(backend: &SseBackend, data: &[f64]) -> Moments {
        f64::moments_f64(backend, data)
    }
}
