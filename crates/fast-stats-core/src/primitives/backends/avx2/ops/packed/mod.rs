//! Packed-group accumulation for the AVX2 backend
//!
//! One load reads sample `r` of every variable in the group, so a single
//! instruction advances `lanes` accumulators at once and no horizontal
//! reduction is needed.

mod f32;
mod f64;

use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::backends::avx2::Avx2Backend;

/// Trait for packed-group accumulation
pub trait PackedAccumulate<T: Sample> {
    /// Per-lane sums; `group.len()` must be a multiple of the register lanes
    unsafe fn packed_sums(backend: &Avx2Backend, group: &[T], out: &mut [f64]);

    /// Per-lane moments; `group.len()` must be a multiple of the register lanes
    unsafe fn packed_moments(backend: &Avx2Backend, group: &[T], out: &mut [Moments]);
}

impl PackedAccumulate<f32> for f32 {
    unsafe fn packed_sums(backend: &Avx2Backend, group: &[f32], out: &mut [f64]) {
        f32::packed_sums_f32(backend, group, out)
    }

    unsafe fn packed_moments(backend: &Avx2Backend, group: &[f32], out: &mut [Moments]) {
        f32::packed_moments_f32(backend, group, out)
    }
}

impl PackedAccumulate<f64> for f64 {
    unsafe fn packed_sums(backend: &Avx2Backend, group: &[f64], out: &mut [f64]) {
        f64::packed_sums_f64(backend, group, out)
    }

    unsafe fn packed_moments(backend: &Avx2Backend, group: &[f64], out: &mut [Moments]) {
        f64::packed_moments_f64(backend, group, out)
    }
}
