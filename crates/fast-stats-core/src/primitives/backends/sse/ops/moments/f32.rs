//! SSE contiguous accumulation for f32
//!
//! Samples are loaded and compared four at a time; sums and squares are taken
//! after widening each register to two f64 vectors.

use crate::moments::Moments;
use crate::primitives::backends::scalar::sum_scalar;
use crate::primitives::backends::sse::utils::*;
use crate::primitives::backends::sse::SseBackend;
use std::arch::x86_64::*;

const LANES: usize = 4;

#[target_feature(enable = "sse2")]
pub unsafe fn sum_f32(_backend: &SseBackend, data: &[f32]) -> f64 {
    let chunks = data.len() / LANES;
    let ptr = data.as_ptr();

    let mut sum_lo = _mm_setzero_pd();
    let mut sum_hi = _mm_setzero_pd();
    for i in 0..chunks {
        let (lo, hi) = widen_ps(_mm_loadu_ps(ptr.add(i * LANES)));
        sum_lo = _mm_add_pd(sum_lo, lo);
        sum_hi = _mm_add_pd(sum_hi, hi);
    }

    horizontal_sum_pd(_mm_add_pd(sum_lo, sum_hi)) + sum_scalar(&data[chunks * LANES..])
}

#[target_feature(enable = "sse2")]
pub unsafe fn moments_f32(_backend: &SseBackend, data: &[f32]) -> Moments {
    let chunks = data.len() / LANES;
    if chunks == 0 {
        return Moments::from_slice(data);
    }
    let ptr = data.as_ptr();

    let first = _mm_loadu_ps(ptr);
    let mut min_vec = first;
    let mut max_vec = first;
    let mut sum_lo = _mm_setzero_pd();
    let mut sum_hi = _mm_setzero_pd();
    let mut sq_lo = _mm_setzero_pd();
    let mut sq_hi = _mm_setzero_pd();

    for i in 0..chunks {
        let v = _mm_loadu_ps(ptr.add(i * LANES));
        min_vec = _mm_min_ps(min_vec, v);
        max_vec = _mm_max_ps(max_vec, v);

        let (lo, hi) = widen_ps(v);
        sum_lo = _mm_add_pd(sum_lo, lo);
        sum_hi = _mm_add_pd(sum_hi, hi);
        sq_lo = _mm_add_pd(sq_lo, _mm_mul_pd(lo, lo));
        sq_hi = _mm_add_pd(sq_hi, _mm_mul_pd(hi, hi));
    }

    let mut acc = Moments::from_parts(
        chunks * LANES,
        horizontal_sum_pd(_mm_add_pd(sum_lo, sum_hi)),
        horizontal_sum_pd(_mm_add_pd(sq_lo, sq_hi)),
        horizontal_min_ps(min_vec),
        horizontal_max_ps(max_vec),
    );
    acc.extend(&data[chunks * LANES..]);
    acc
}
