//! SSE2 packed-group accumulation for f64 (2 variables per instruction)

use crate::moments::Moments;
use crate::primitives::backends::sse::utils::store_pd;
use crate::primitives::backends::sse::SseBackend;
use std::arch::x86_64::*;

const LANES: usize = 2;

#[target_feature(enable = "sse2")]
pub unsafe fn packed_sums_f64(_backend: &SseBackend, group: &[f64], out: &mut [f64]) {
    let rows = group.len() / LANES;
    let ptr = group.as_ptr();

    let mut sum_vec = _mm_setzero_pd();
    for row in 0..rows {
        sum_vec = _mm_add_pd(sum_vec, _mm_loadu_pd(ptr.add(row * LANES)));
    }

    out[..LANES].copy_from_slice(&store_pd(sum_vec));
}

#[target_feature(enable = "sse2")]
pub unsafe fn packed_moments_f64(_backend: &SseBackend, group: &[f64], out: &mut [Moments]) {
    let rows = group.len() / LANES;
    if rows == 0 {
        out[..LANES].fill(Moments::new());
        return;
    }
    let ptr = group.as_ptr();

    let first = _mm_loadu_pd(ptr);
    let mut sum_vec = first;
    let mut sq_vec = _mm_mul_pd(first, first);
    let mut min_vec = first;
    let mut max_vec = first;

    for row in 1..rows {
        let v = _mm_loadu_pd(ptr.add(row * LANES));
        sum_vec = _mm_add_pd(sum_vec, v);
        sq_vec = _mm_add_pd(sq_vec, _mm_mul_pd(v, v));
        min_vec = _mm_min_pd(min_vec, v);
        max_vec = _mm_max_pd(max_vec, v);
    }

    let sums = store_pd(sum_vec);
    let squares = store_pd(sq_vec);
    let mins = store_pd(min_vec);
    let maxes = store_pd(max_vec);
    for lane in 0..LANES {
        out[lane] = Moments::from_parts(rows, sums[lane], squares[lane], mins[lane], maxes[lane]);
    }
}
