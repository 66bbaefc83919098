//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate array lengths that exercise every vector remainder
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        1,   // Single element
        2,   // SSE f64 width
        3,   // SSE f64 width + 1
        4,   // AVX2 f64 / SSE f32 width
        5,   // AVX2 f64 width + 1
        7,   // AVX2 f32 width - 1
        8,   // AVX2 f32 width
        9,   // AVX2 f32 width + 1
        15,  // Multiple of no width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
        2049, // Long enough for f32 rounding to matter
    ]
}

/// Deterministic samples in `[-scale, scale)`
pub fn seeded_data(len: usize, seed: u64, scale: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Narrow a vector of samples to f32
pub fn narrow(data: &[f64]) -> Vec<f32> {
    data.iter().map(|&x| x as f32).collect()
}

/// Tolerance for f32 samples accumulated in f64 lanes
///
/// Only the summation order differs from the scalar reference.
pub fn f32_tolerance(data: &[f32]) -> f64 {
    let magnitude: f64 = data.iter().map(|&x| (x as f64).abs()).sum();
    let squares: f64 = data.iter().map(|&x| (x as f64) * (x as f64)).sum();
    1e-12 * (magnitude + squares) + 1e-12
}
