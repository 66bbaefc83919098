//! AVX2 contiguous accumulation for f32
//!
//! Eight samples are loaded and compared per instruction. Sums and squares
//! run in f64 after widening each register into two 4-lane halves, so long
//! or offset variables keep full 64-bit accumulation accuracy.

use crate::moments::Moments;
use crate::primitives::backends::avx2::utils::*;
use crate::primitives::backends::avx2::Avx2Backend;
use crate::primitives::backends::scalar::sum_scalar;
use std::arch::x86_64::*;

const LANES: usize = 8;

/// AVX2 implementation of sum for f32
#[target_feature(enable = "avx2")]
pub unsafe fn sum_f32(_backend: &Avx2Backend, data: &[f32]) -> f64 {
    let chunks = data.len() / LANES;
    let ptr = data.as_ptr();

    let mut sum_lo = _mm256_setzero_pd();
    let mut sum_hi = _mm256_setzero_pd();
    for i in 0..chunks {
        let (lo, hi) = widen_ps(_mm256_loadu_ps(ptr.add(i * LANES)));
        sum_lo = _mm256_add_pd(sum_lo, lo);
        sum_hi = _mm256_add_pd(sum_hi, hi);
    }

    horizontal_sum_pd(_mm256_add_pd(sum_lo, sum_hi)) + sum_scalar(&data[chunks * LANES..])
}

/// AVX2 implementation of sum, sum of squares and extrema for f32
#[target_feature(enable = "avx2")]
pub unsafe fn moments_f32(_backend: &Avx2Backend, data: &[f32]) -> Moments {
    let chunks = data.len() / LANES;
    if chunks == 0 {
        return Moments::from_slice(data);
    }
    let ptr = data.as_ptr();

    let first = _mm256_loadu_ps(ptr);
    let mut min_vec = first;
    let mut max_vec = first;
    let mut sum_lo = _mm256_setzero_pd();
    let mut sum_hi = _mm256_setzero_pd();
    let mut sq_lo = _mm256_setzero_pd();
    let mut sq_hi = _mm256_setzero_pd();

    for i in 0..chunks {
        let v = _mm256_loadu_ps(ptr.add(i * LANES));
        min_vec = _mm256_min_ps(min_vec, v);
        max_vec = _mm256_max_ps(max_vec, v);

        let (lo, hi) = widen_ps(v);
        sum_lo = _mm256_add_pd(sum_lo, lo);
        sum_hi = _mm256_add_pd(sum_hi, hi);
        sq_lo = _mm256_add_pd(sq_lo, _mm256_mul_pd(lo, lo));
        sq_hi = _mm256_add_pd(sq_hi, _mm256_mul_pd(hi, hi));
    }

    let mut acc = Moments::from_parts(
        chunks * LANES,
        horizontal_sum_pd(_mm256_add_pd(sum_lo, sum_hi)),
        horizontal_sum_pd(_mm256_add_pd(sq_lo, sq_hi)),
        horizontal_min_ps(min_vec),
        horizontal_max_ps(max_vec),
    );

    // Handle remainder
    acc.extend(&data[chunks * LANES..]);
    acc
}
