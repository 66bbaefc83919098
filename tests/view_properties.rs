//! Dataset view behaviour: repeatability, sharing and metric selection

mod common;

use common::{init_tracing, random_dataset, reference_dataset};
use fast_stats::{DatasetView, Layout, Metrics, Precision, StatsConfig};

fn all_views(dataset: &[Vec<f64>]) -> Vec<DatasetView> {
    let mut views = Vec::new();
    for precision in [Precision::Float32, Precision::Float64] {
        for packed in [false, true] {
            views.push(DatasetView::new(dataset, precision, packed).unwrap());
        }
        for layout in fast_stats::available_layouts() {
            views.push(DatasetView::with_layout(dataset, precision, layout).unwrap());
        }
    }
    views
}

#[test]
fn test_repeated_queries_are_identical() {
    init_tracing();
    let dataset = random_dataset(9, 40, 21);
    for view in all_views(&dataset) {
        let first = view.descriptive_statistics().unwrap();
        let second = view.descriptive_statistics().unwrap();
        assert_eq!(first, second, "{} {}", view.precision(), view.layout());
        assert_eq!(view.mean(), view.mean());
    }
}

#[test]
fn test_view_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DatasetView>();

    let dataset = random_dataset(6, 128, 4);
    let view = DatasetView::new(&dataset, Precision::Float32, true).unwrap();
    let expected = view.descriptive_statistics().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| view.descriptive_statistics().unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_mean_matches_records() {
    let dataset = random_dataset(5, 17, 8);
    for view in all_views(&dataset) {
        let records = view.descriptive_statistics_with(Metrics::BASIC).unwrap();
        for (m, record) in view.mean().iter().zip(&records) {
            assert!((m - record.mean.unwrap()).abs() <= 1e-12);
        }
    }
}

#[test]
fn test_metric_subsets() {
    let dataset = reference_dataset();
    let view = DatasetView::new(&dataset, Precision::Float64, true).unwrap();

    let records = view.descriptive_statistics_with(Metrics::MEDIAN | Metrics::MIN).unwrap();
    assert_eq!(records.len(), 4);
    for record in &records {
        assert_eq!(record.metrics(), Metrics::MEDIAN | Metrics::MIN);
        assert!(record.mean.is_none());
    }
    assert_eq!(records[0].min, Some(0.1477));

    let quartiles = view.descriptive_statistics_with(Metrics::QUARTILES).unwrap();
    assert!(quartiles.iter().all(|r| r.min.is_none() && r.q3.is_some()));

    let metrics: Metrics = "mean,variance".parse().unwrap();
    let records = view.descriptive_statistics_with(metrics).unwrap();
    assert_eq!(records[3].to_map().keys().copied().collect::<Vec<_>>(), vec!["mean", "variance"]);
}

#[test]
fn test_view_introspection() {
    let dataset = random_dataset(3, 10, 2);
    let view = DatasetView::new(&dataset, Precision::Float64, false).unwrap();
    assert_eq!(view.num_variables(), 3);
    assert_eq!(view.rows(), Some(10));
    assert_eq!(view.layout(), Layout::Unpacked);
    assert!(["scalar", "sse", "avx2"].contains(&view.backend_name()));

    let ragged = vec![vec![1.0], vec![2.0, 3.0]];
    let view = DatasetView::new(&ragged, Precision::Float32, false).unwrap();
    assert_eq!(view.rows(), None);
}

#[test]
fn test_config_driven_queries() -> anyhow::Result<()> {
    let dataset = reference_dataset();
    let config = StatsConfig::new(Precision::Float32, Layout::Unpacked).with_metrics(Metrics::ALL);
    let records = fast_stats::descriptive_statistics_with(&dataset, &config)?;
    assert_eq!(records[0].metrics(), Metrics::ALL);

    let tokens = StatsConfig::from_tokens("double", "unpacked")?.with_metrics("quartiles".parse()?);
    let records = fast_stats::descriptive_statistics_with(&dataset, &tokens)?;
    assert!((records[0].median.unwrap() - 0.30785).abs() <= 1e-12);
    assert!(records[0].mean.is_none());
    Ok(())
}

#[test]
fn test_layout_and_precision_serde() -> anyhow::Result<()> {
    for layout in fast_stats::available_layouts() {
        let json = serde_json::to_string(&layout)?;
        assert_eq!(json, format!("\"{layout}\""));
        assert_eq!(serde_json::from_str::<Layout>(&json)?, layout);
    }
    assert_eq!(serde_json::to_string(&Precision::Float32)?, "\"float32\"");
    assert!(serde_json::from_str::<Layout>("\"packed-512\"").is_err());
    Ok(())
}
