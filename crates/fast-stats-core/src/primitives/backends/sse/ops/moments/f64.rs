//! SSE2 contiguous accumulation for f64

use crate::moments::Moments;
use crate::primitives::backends::scalar::sum_scalar;
use crate::primitives::backends::sse::utils::*;
use crate::primitives::backends::sse::SseBackend;
use std::arch::x86_64::*;

const LANES: usize = 2;

#[target_feature(enable = "sse2")]
pub unsafe fn sum_f64(_backend: &SseBackend, data: &[f64]) -> f64 {
    let chunks = data.len() / LANES;
    let ptr = data.as_ptr();

    let mut sum_vec = _mm_setzero_pd();
    for i in 0..chunks {
        sum_vec = _mm_add_pd(sum_vec, _mm_loadu_pd(ptr.add(i * LANES)));
    }

    horizontal_sum_pd(sum_vec) + sum_scalar(&data[chunks * LANES..])
}

#[target_feature(enable = "sse2")]
pub unsafe fn moments_f64(_backend: &SseBackend, data: &[f64]) -> Moments {
    let chunks = data.len() / LANES;
    if chunks == 0 {
        return Moments::from_slice(data);
    }
    let ptr = data.as_ptr();

    let first = _mm_loadu_pd(ptr);
    let mut sum_vec = first;
    let mut sq_vec = _mm_mul_pd(first, first);
    let mut min_vec = first;
    let mut max_vec = first;

    for i in 1..chunks {
        let v = _mm_loadu_pd(ptr.add(i * LANES));
        sum_vec = _mm_add_pd(sum_vec, v);
        sq_vec = _mm_add_pd(sq_vec, _mm_mul_pd(v, v));
        min_vec = _mm_min_pd(min_vec, v);
        max_vec = _mm_max_pd(max_vec, v);
    }

    let mut acc = Moments::from_parts(
        chunks * LANES,
        horizontal_sum_pd(sum_vec),
        horizontal_sum_pd(sq_vec),
        horizontal_min_pd(min_vec),
        horizontal_max_pd(max_vec),
    );
    acc.extend(&data[chunks * LANES..]);
    acc
}
