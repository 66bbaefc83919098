//! AVX2 contiguous accumulation for f64

use crate::moments::Moments;
use crate::primitives::backends::avx2::utils::*;
use crate::primitives::backends::avx2::Avx2Backend;
use crate::primitives::backends::scalar::sum_scalar;
use std::arch::x86_64::*;

const LANES: usize = 4;

/// AVX2 implementation of sum for f64
#[target_feature(enable = "avx2")]
pub unsafe fn sum_f64(_backend: &Avx2Backend, data: &[f64]) -> f64 {
    let chunks = data.len() / LANES;
    let ptr = data.as_ptr();

    let mut sum_vec = _mm256_setzero_pd();
    for i in 0..chunks {
        let v = _mm256_loadu_pd(ptr.add(i * LANES));
        sum_vec = _mm256_add_pd(sum_vec, v);
    }

    horizontal_sum_pd(sum_vec) + sum_scalar(&data[chunks * LANES..])
}

/// AVX2 implementation of sum, sum of squares and extrema for f64
#[target_feature(enable = "avx2")]
pub unsafe fn moments_f64(_backend: &Avx2Backend, data: &[f64]) -> Moments {
    let chunks = data.len() / LANES;
    if chunks == 0 {
        return Moments::from_slice(data);
    }
    let ptr = data.as_ptr();

    // Seed extrema with the first vector so no sentinel lanes survive
    let first = _mm256_loadu_pd(ptr);
    let mut sum_vec = first;
    let mut sq_vec = _mm256_mul_pd(first, first);
    let mut min_vec = first;
    let mut max_vec = first;

    for i in 1..chunks {
        let v = _mm256_loadu_pd(ptr.add(i * LANES));
        sum_vec = _mm256_add_pd(sum_vec, v);
        sq_vec = _mm256_add_pd(sq_vec, _mm256_mul_pd(v, v));
        min_vec = _mm256_min_pd(min_vec, v);
        max_vec = _mm256_max_pd(max_vec, v);
    }

    let mut acc = Moments::from_parts(
        chunks * LANES,
        horizontal_sum_pd(sum_vec),
        horizontal_sum_pd(sq_vec),
        horizontal_min_pd(min_vec),
        horizontal_max_pd(max_vec),
    );

    // Handle remainder
    acc.extend(&data[chunks * LANES..]);
    acc
}
