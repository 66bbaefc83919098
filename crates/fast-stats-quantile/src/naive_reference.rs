//! Naive reference implementation of R-7 percentiles
//!
//! Intentionally simple and unoptimized. Serves as a reference for verifying
//! the estimator in `linear.rs`.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

/// Percentile `pct` in `[0, 100]` of `data`, computed by full sort and
/// textbook interpolation
pub fn naive_percentile(data: &[f64], pct: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute percentile of empty data");
    assert!((0.0..=100.0).contains(&pct), "Percentile must be in [0, 100]");

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len();
    if pct == 100.0 {
        return sorted[n - 1];
    }

    let h = (n - 1) as f64 * pct / 100.0;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
