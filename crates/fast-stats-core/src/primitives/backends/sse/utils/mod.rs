//! Shared utilities for SSE implementations

use std::arch::x86_64::*;

/// Horizontal sum of a __m128d (2 f64s)
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn horizontal_sum_pd(v: __m128d) -> f64 {
    let high = _mm_unpackhi_pd(v, v);
    _mm_cvtsd_f64(_mm_add_sd(v, high))
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn horizontal_min_pd(v: __m128d) -> f64 {
    let [a, b] = store_pd(v);
    a.min(b)
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn horizontal_max_pd(v: __m128d) -> f64 {
    let [a, b] = store_pd(v);
    a.max(b)
}

/// Smallest of the 4 f32 lanes, widened
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn horizontal_min_ps(v: __m128) -> f64 {
    store_ps(v).into_iter().fold(f32::INFINITY, f32::min) as f64
}

/// Largest of the 4 f32 lanes, widened
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn horizontal_max_ps(v: __m128) -> f64 {
    store_ps(v).into_iter().fold(f32::NEG_INFINITY, f32::max) as f64
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn store_pd(v: __m128d) -> [f64; 2] {
    let mut out = [0.0f64; 2];
    _mm_storeu_pd(out.as_mut_ptr(), v);
    out
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn store_ps(v: __m128) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    _mm_storeu_ps(out.as_mut_ptr(), v);
    out
}

/// Widen 4 f32 lanes into two f64 vectors: lanes 0-1 and lanes 2-3
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn widen_ps(v: __m128) -> (__m128d, __m128d) {
    (_mm_cvtps_pd(v), _mm_cvtps_pd(_mm_movehl_ps(v, v)))
}

/// Per-lane totals of a widened accumulator pair
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn store_widened(lo: __m128d, hi: __m128d) -> [f64; 4] {
    let [a, b] = store_pd(lo);
    let [c, d] = store_pd(hi);
    [a, b, c, d]
}
