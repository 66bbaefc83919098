//! Every backend must reduce to the same moments as the scalar reference

mod common;

use approx::assert_abs_diff_eq;
use common::{edge_case_lengths, f32_tolerance, narrow, seeded_data};
use fast_stats_core::{
    probe, Backend, ComputePrimitives, LaneWidth, Moments, Sample, ScalarBackend,
};
use proptest::prelude::*;

fn vector_backends() -> Vec<Backend> {
    probe::available_widths()
        .into_iter()
        .filter_map(|w| Backend::for_width(w).ok())
        .collect()
}

fn interleave<T: Sample>(columns: &[Vec<T>], rows: usize) -> Vec<T> {
    let lanes = columns.len();
    let mut group = vec![T::zero(); rows * lanes];
    for (lane, column) in columns.iter().enumerate() {
        for (r, &v) in column.iter().enumerate() {
            group[r * lanes + lane] = v;
        }
    }
    group
}

#[test]
fn test_contiguous_moments_f64() {
    for backend in vector_backends() {
        for (seed, len) in edge_case_lengths().into_iter().enumerate() {
            let data = seeded_data(len, seed as u64, 50.0);
            let expected = ScalarBackend.moments(&data[..]);
            let actual = backend.moments(&data[..]);
            assert_eq!(actual.count, len);
            assert_eq!(actual.min, expected.min);
            assert_eq!(actual.max, expected.max);
            assert_abs_diff_eq!(actual.sum, expected.sum, epsilon = 1e-8);
            assert_abs_diff_eq!(actual.sum_sq, expected.sum_sq, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_contiguous_moments_f32() {
    for backend in vector_backends() {
        for (seed, len) in edge_case_lengths().into_iter().enumerate() {
            let data = narrow(&seeded_data(len, 100 + seed as u64, 50.0));
            let tol = f32_tolerance(&data);
            let expected = ScalarBackend.moments(&data[..]);
            let actual = backend.moments(&data[..]);
            assert_eq!(actual.count, len);
            assert_eq!(actual.min, expected.min);
            assert_eq!(actual.max, expected.max);
            assert_abs_diff_eq!(actual.sum, expected.sum, epsilon = tol);
            assert_abs_diff_eq!(actual.sum_sq, expected.sum_sq, epsilon = tol);
        }
    }
}

#[test]
fn test_packed_groups_match_columns() {
    for backend in vector_backends() {
        let Some(width) = backend.width() else {
            continue;
        };
        let lanes = width.lanes::<f64>();
        for rows in [1, 3, 8, 33] {
            let columns: Vec<Vec<f64>> = (0..lanes)
                .map(|l| seeded_data(rows, 7 * l as u64 + rows as u64, 10.0))
                .collect();
            let group = interleave(&columns, rows);
            let mut packed = vec![Moments::new(); lanes];
            backend.packed_moments(&group[..], lanes, &mut packed);
            let mut sums = vec![0.0; lanes];
            backend.packed_sums(&group[..], lanes, &mut sums);

            for (l, column) in columns.iter().enumerate() {
                let expected = Moments::from_slice(&column[..]);
                assert_eq!(packed[l].count, rows);
                assert_eq!(packed[l].min, expected.min);
                assert_eq!(packed[l].max, expected.max);
                assert_abs_diff_eq!(packed[l].sum, expected.sum, epsilon = 1e-9);
                assert_abs_diff_eq!(packed[l].sum_sq, expected.sum_sq, epsilon = 1e-9);
                assert_abs_diff_eq!(sums[l], expected.sum, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_f32_variance_on_offset_data_matches_f64_accumulation() {
    // Samples in [10, 11): sum of squares dwarfs the variance
    for backend in vector_backends() {
        let Some(width) = backend.width() else {
            continue;
        };
        let lanes = width.lanes::<f32>();
        let rows = 2000;
        let columns: Vec<Vec<f32>> = (0..lanes)
            .map(|l| {
                let shifted: Vec<f64> = seeded_data(rows, 900 + l as u64, 0.5)
                    .into_iter()
                    .map(|x| x + 10.5)
                    .collect();
                narrow(&shifted)
            })
            .collect();
        let group = interleave(&columns, rows);
        let mut packed = vec![Moments::new(); lanes];
        backend.packed_moments(&group[..], lanes, &mut packed);

        for (l, column) in columns.iter().enumerate() {
            let expected = Moments::from_slice(&column[..]).finalize().unwrap();
            let actual = packed[l].finalize().unwrap();
            assert_eq!(packed[l].count, rows);
            assert_eq!(actual.min, expected.min);
            assert_eq!(actual.max, expected.max);
            assert_abs_diff_eq!(actual.mean, expected.mean, epsilon = 1e-12);
            assert_abs_diff_eq!(actual.variance, expected.variance, epsilon = 1e-9);
        }

        let contiguous = backend.moments(&columns[0][..]).finalize().unwrap();
        let expected = Moments::from_slice(&columns[0][..]).finalize().unwrap();
        assert_abs_diff_eq!(contiguous.variance, expected.variance, epsilon = 1e-9);
    }
}

#[test]
fn test_explicit_widths_report_unsupported() {
    for width in [LaneWidth::W128, LaneWidth::W256] {
        match Backend::for_width(width) {
            Ok(backend) => assert_eq!(backend.width(), Some(width)),
            Err(e) => {
                assert!(!width.is_available());
                assert!(matches!(
                    e,
                    fast_stats_core::Error::UnsupportedConfiguration(_)
                ));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_best_backend_matches_scalar(
        data in prop::collection::vec(-1.0e3f64..1.0e3, 1..300)
    ) {
        let backend = Backend::best_available();
        let expected = ScalarBackend.moments(&data[..]).finalize().unwrap();
        let actual = backend.moments(&data[..]).finalize().unwrap();
        prop_assert_eq!(actual.min, expected.min);
        prop_assert_eq!(actual.max, expected.max);
        prop_assert!((actual.mean - expected.mean).abs() <= 1e-9);
        prop_assert!((actual.variance - expected.variance).abs() <= 1e-6 * (1.0 + expected.variance));
        prop_assert!(actual.variance >= 0.0);
    }

    #[test]
    fn prop_constant_input_has_zero_variance(
        value in -1.0e6f64..1.0e6,
        len in 1usize..200
    ) {
        let data = vec![value; len];
        let summary = Backend::best_available().moments(&data[..]).finalize().unwrap();
        prop_assert_eq!(summary.variance, 0.0);
        prop_assert_eq!(summary.standard_deviation, 0.0);
        prop_assert_eq!(summary.min, value);
        prop_assert_eq!(summary.max, value);
    }
}
