//! Cross-strategy agreement: every layout and precision matches the baseline

mod common;

use common::{assert_records_close, offset_dataset, random_dataset, strategies, F32_TOLERANCE, F64_TOLERANCE};
use fast_stats::{
    available_layouts, descriptive_statistics_unpacked, lane_count, DatasetView, Error, Layout,
    Precision,
};
use proptest::prelude::*;

fn check_all_strategies(dataset: &[Vec<f64>]) {
    let baseline = descriptive_statistics_unpacked(dataset).unwrap();
    for (name, strategy, tol) in strategies() {
        match strategy(dataset) {
            Ok(records) => assert_records_close(&records, &baseline, tol, name),
            Err(Error::UnsupportedConfiguration(_)) => {}
            Err(e) => panic!("{name}: {e}"),
        }
    }
}

#[test]
fn test_single_variable() {
    check_all_strategies(&random_dataset(1, 37, 1));
}

#[test]
fn test_variable_counts_not_multiple_of_lanes() {
    for num_variables in [3, 5, 7, 9, 13] {
        check_all_strategies(&random_dataset(num_variables, 19, num_variables as u64));
    }
}

#[test]
fn test_single_sample_variables() {
    let dataset = random_dataset(6, 1, 3);
    check_all_strategies(&dataset);
    for record in descriptive_statistics_unpacked(&dataset).unwrap() {
        assert_eq!(record.variance, Some(0.0));
        assert_eq!(record.standard_deviation, Some(0.0));
    }
}

#[test]
fn test_constant_variables_have_zero_variance() {
    let dataset = vec![vec![0.3; 50], vec![-7.25; 50], vec![1e6; 50]];
    for (name, strategy, _) in common::strategies() {
        let Ok(records) = strategy(&dataset) else {
            continue;
        };
        for record in records {
            assert_eq!(record.variance, Some(0.0), "{name}");
            assert_eq!(record.standard_deviation, Some(0.0), "{name}");
        }
    }
}

#[test]
fn test_long_f32_variables_stay_within_tolerance() {
    let dataset = random_dataset(5, 3000, 11);
    let baseline = descriptive_statistics_unpacked(&dataset).unwrap();
    for layout in available_layouts() {
        let view = DatasetView::with_layout(&dataset, Precision::Float32, layout).unwrap();
        let records = view
            .descriptive_statistics_with(fast_stats::Metrics::BASIC)
            .unwrap();
        assert_records_close(&records, &baseline, F32_TOLERANCE, &layout.to_string());
    }
}

#[test]
fn test_f32_strategies_on_offset_data() {
    // Samples in [10, 11): the squares are ~100x the spread
    let dataset = offset_dataset(4, 2000, 17, 10.0);
    let baseline = descriptive_statistics_unpacked(&dataset).unwrap();
    let f32_strategies: [(&str, common::Strategy); 3] = [
        ("packed_float32", fast_stats::descriptive_statistics_packed_float32::<Vec<f64>>),
        ("packed128_float32", fast_stats::descriptive_statistics_packed128_float32::<Vec<f64>>),
        ("packed256_float32", fast_stats::descriptive_statistics_packed256_float32::<Vec<f64>>),
    ];
    for (name, strategy) in f32_strategies {
        match strategy(&dataset) {
            Ok(records) => assert_records_close(&records, &baseline, F32_TOLERANCE, name),
            Err(Error::UnsupportedConfiguration(_)) => {}
            Err(e) => panic!("{name}: {e}"),
        }
    }
    let view = DatasetView::new(&dataset, Precision::Float32, false).unwrap();
    let records = view.descriptive_statistics_with(fast_stats::Metrics::BASIC).unwrap();
    assert_records_close(&records, &baseline, F32_TOLERANCE, "unpacked float32 view");
}

#[test]
fn test_every_available_layout_matches_scalar_view() {
    let dataset = random_dataset(11, 23, 5);
    for precision in [Precision::Float32, Precision::Float64] {
        let tol = match precision {
            Precision::Float32 => F32_TOLERANCE,
            Precision::Float64 => F64_TOLERANCE,
        };
        let scalar = DatasetView::scalar(&dataset, precision, Layout::Unpacked)
            .unwrap()
            .descriptive_statistics()
            .unwrap();
        for layout in available_layouts() {
            let view = DatasetView::with_layout(&dataset, precision, layout).unwrap();
            if let Some(width) = layout.width() {
                assert_eq!(layout.lanes(precision), lane_count(width, precision));
            }
            let records = view.descriptive_statistics().unwrap();
            assert_records_close(&records, &scalar, tol, &format!("{layout} {precision}"));
            for (a, b) in records.iter().zip(&scalar) {
                // Quartiles come from the same converted samples on every layout
                assert_eq!(a.median, b.median);
                assert_eq!(a.q1, b.q1);
                assert_eq!(a.q3, b.q3);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_strategies_agree(
        num_variables in 1usize..12,
        rows in 1usize..48,
        seed in any::<u64>()
    ) {
        check_all_strategies(&random_dataset(num_variables, rows, seed));
    }

    #[test]
    fn prop_variance_identity(
        dataset in prop::collection::vec(prop::collection::vec(-100.0f64..100.0, 2..64), 1..6)
    ) {
        let records = fast_stats::descriptive_statistics(&dataset).unwrap();
        for (record, variable) in records.iter().zip(&dataset) {
            let n = variable.len() as f64;
            let mean = variable.iter().sum::<f64>() / n;
            let two_pass = variable.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            prop_assert!((record.variance.unwrap() - two_pass).abs() <= 1e-9 * (1.0 + two_pass));
            prop_assert!(record.variance.unwrap() >= 0.0);
        }
    }
}
