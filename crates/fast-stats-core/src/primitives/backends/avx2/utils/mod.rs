//! Shared utilities for AVX2 implementations
//!
//! Lane extraction and horizontal reductions used once a vector pass is done.

use std::arch::x86_64::*;

/// Horizontal sum of a __m256d (4 f64s)
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn horizontal_sum_pd(v: __m256d) -> f64 {
    // Extract high and low 128-bit lanes
    let high = _mm256_extractf128_pd(v, 1);
    let low = _mm256_castpd256_pd128(v);

    let sum128 = _mm_add_pd(high, low);
    let sum = _mm_hadd_pd(sum128, sum128);

    _mm_cvtsd_f64(sum)
}

/// Smallest of the 4 f64 lanes
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn horizontal_min_pd(v: __m256d) -> f64 {
    store_pd(v).into_iter().fold(f64::INFINITY, f64::min)
}

/// Largest of the 4 f64 lanes
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn horizontal_max_pd(v: __m256d) -> f64 {
    store_pd(v).into_iter().fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest of the 8 f32 lanes, widened
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn horizontal_min_ps(v: __m256) -> f64 {
    store_ps(v).into_iter().fold(f32::INFINITY, f32::min) as f64
}

/// Largest of the 8 f32 lanes, widened
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn horizontal_max_ps(v: __m256) -> f64 {
    store_ps(v).into_iter().fold(f32::NEG_INFINITY, f32::max) as f64
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn store_pd(v: __m256d) -> [f64; 4] {
    let mut out = [0.0f64; 4];
    _mm256_storeu_pd(out.as_mut_ptr(), v);
    out
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn store_ps(v: __m256) -> [f32; 8] {
    let mut out = [0.0f32; 8];
    _mm256_storeu_ps(out.as_mut_ptr(), v);
    out
}

/// Widen 8 f32 lanes into two f64 vectors: lanes 0-3 and lanes 4-7
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn widen_ps(v: __m256) -> (__m256d, __m256d) {
    (
        _mm256_cvtps_pd(_mm256_castps256_ps128(v)),
        _mm256_cvtps_pd(_mm256_extractf128_ps(v, 1)),
    )
}

/// Per-lane totals of a widened accumulator pair
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn store_widened(lo: __m256d, hi: __m256d) -> [f64; 8] {
    let mut out = [0.0f64; 8];
    _mm256_storeu_pd(out.as_mut_ptr(), lo);
    _mm256_storeu_pd(out.as_mut_ptr().add(4), hi);
    out
}
