//! SSE packed-group accumulation for f32 (4 variables per instruction)

use crate::moments::Moments;
use crate::primitives::backends::sse::utils::{store_ps, store_widened, widen_ps};
use crate::primitives::backends::sse::SseBackend;
use std::arch::x86_64::*;

const LANES: usize = 4;

#[target_feature(enable = "sse2")]
pub unsafe fn packed_sums_f32(_backend: &SseBackend, group: &[f32], out: &mut [f64]) {
    let rows = group.len() / LANES;
    let ptr = group.as_ptr();

    let mut sum_lo = _mm_setzero_pd();
    let mut sum_hi = _mm_setzero_pd();
    for row in 0..rows {
        let (lo, hi) = widen_ps(_mm_loadu_ps(ptr.add(row * LANES)));
        sum_lo = _mm_add_pd(sum_lo, lo);
        sum_hi = _mm_add_pd(sum_hi, hi);
    }

    out[..LANES].copy_from_slice(&store_widened(sum_lo, sum_hi));
}

#[target_feature(enable = "sse2")]
pub unsafe fn packed_moments_f32(_backend: &SseBackend, group: &[f32], out: &mut [Moments]) {
    let rows = group.len() / LANES;
    if rows == 0 {
        out[..LANES].fill(Moments::new());
        return;
    }
    let ptr = group.as_ptr();

    let first = _mm_loadu_ps(ptr);
    let mut min_vec = first;
    let mut max_vec = first;
    let mut sum_lo = _mm_setzero_pd();
    let mut sum_hi = _mm_setzero_pd();
    let mut sq_lo = _mm_setzero_pd();
    let mut sq_hi = _mm_setzero_pd();

    for row in 0..rows {
        let v = _mm_loadu_ps(ptr.add(row * LANES));
        min_vec = _mm_min_ps(min_vec, v);
        max_vec = _mm_max_ps(max_vec, v);

        let (lo, hi) = widen_ps(v);
        sum_lo = _mm_add_pd(sum_lo, lo);
        sum_hi = _mm_add_pd(sum_hi, hi);
        sq_lo = _mm_add_pd(sq_lo, _mm_mul_pd(lo, lo));
        sq_hi = _mm_add_pd(sq_hi, _mm_mul_pd(hi, hi));
    }

    let sums = store_widened(sum_lo, sum_hi);
    let squares = store_widened(sq_lo, sq_hi);
    let mins = store_ps(min_vec);
    let maxes = store_ps(max_vec);
    for lane in 0..LANES {
        out[lane] = Moments::from_parts(
            rows,
            sums[lane],
            squares[lane],
            mins[lane] as f64,
            maxes[lane] as f64,
        );
    }
}
