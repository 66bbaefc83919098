//! Shared utilities for integration tests

#![allow(dead_code)]

use fast_stats::{Result, StatisticsRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

pub const F64_TOLERANCE: f64 = 1e-9;
pub const F32_TOLERANCE: f64 = 1e-6;

pub type Strategy = fn(&[Vec<f64>]) -> Result<Vec<StatisticsRecord>>;

/// Every public entry point with its name and precision tolerance
pub fn strategies() -> Vec<(&'static str, Strategy, f64)> {
    vec![
        ("auto", fast_stats::descriptive_statistics::<Vec<f64>> as Strategy, F64_TOLERANCE),
        ("unpacked", fast_stats::descriptive_statistics_unpacked::<Vec<f64>> as Strategy, F64_TOLERANCE),
        ("packed_float32", fast_stats::descriptive_statistics_packed_float32::<Vec<f64>> as Strategy, F32_TOLERANCE),
        ("packed_float64", fast_stats::descriptive_statistics_packed_float64::<Vec<f64>> as Strategy, F64_TOLERANCE),
        ("packed128_float32", fast_stats::descriptive_statistics_packed128_float32::<Vec<f64>> as Strategy, F32_TOLERANCE),
        ("packed128_float64", fast_stats::descriptive_statistics_packed128_float64::<Vec<f64>> as Strategy, F64_TOLERANCE),
        ("packed256_float32", fast_stats::descriptive_statistics_packed256_float32::<Vec<f64>> as Strategy, F32_TOLERANCE),
        ("packed256_float64", fast_stats::descriptive_statistics_packed256_float64::<Vec<f64>> as Strategy, F64_TOLERANCE),
    ]
}

/// The four-variable scenario used throughout the tests
pub fn reference_dataset() -> Vec<Vec<f64>> {
    vec![
        vec![0.6269, 0.3783, 0.1477, 0.2374],
        vec![0.4209, 0.1055, 0.8000, 0.2023],
        vec![0.1124, 0.1021, 0.1936, 0.8566],
        vec![0.6454, 0.5362, 0.4567, 0.8309],
    ]
}

/// Expected `[min, max, mean, variance, standard_deviation]` per reference variable
pub fn reference_expected() -> Vec<[f64; 5]> {
    vec![
        [0.1477, 0.6269, 0.347575, 0.032763756875, 0.1810076155165853],
        [0.1055, 0.8000, 0.382175, 0.071245356875, 0.2669182587890907],
        [0.1021, 0.8566, 0.316175, 0.098609041875, 0.3140207666301705],
        [0.4567, 0.8309, 0.6173, 0.019696035, 0.140342563037733],
    ]
}

/// Uniform `[0, 1)` samples, `num_variables` × `rows`, seeded
pub fn random_dataset(num_variables: usize, rows: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Uniform::new(0.0, 1.0);
    (0..num_variables)
        .map(|_| (0..rows).map(|_| dist.sample(&mut rng)).collect())
        .collect()
}

/// Uniform `[offset, offset + 1)` samples, seeded
pub fn offset_dataset(num_variables: usize, rows: usize, seed: u64, offset: f64) -> Vec<Vec<f64>> {
    random_dataset(num_variables, rows, seed)
        .into_iter()
        .map(|variable| variable.into_iter().map(|x| x + offset).collect())
        .collect()
}

/// Compare the five moment metrics of two record sets at an absolute tolerance
pub fn assert_records_close(actual: &[StatisticsRecord], expected: &[StatisticsRecord], tol: f64, context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: record count");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        for name in ["min", "max", "mean", "variance", "standard_deviation"] {
            let (x, y) = (metric(a, name), metric(e, name));
            assert!(
                (x - y).abs() <= tol,
                "{context}: variable {i} {name} = {x}, expected {y} (tol {tol})"
            );
        }
    }
}

pub fn metric(record: &StatisticsRecord, name: &str) -> f64 {
    record
        .get(name)
        .unwrap_or_else(|| panic!("record is missing {name}"))
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
