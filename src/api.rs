//! Public entry points
//!
//! Every function validates the dataset, materializes it once and returns one
//! record per variable carrying `min`, `max`, `mean`, `variance` and
//! `standard_deviation`.
//!
//! | Function | Precision | Layout | Backend |
//! |----------|-----------|--------|---------|
//! | [`descriptive_statistics`] | f64 | widest packed, else unpacked | widest, else scalar |
//! | [`descriptive_statistics_unpacked`] | f64 | unpacked | scalar |
//! | `descriptive_statistics_packed_floatN` | N | widest packed, else packed-128 | widest, else scalar |
//! | `descriptive_statistics_packedW_floatN` | N | packed-W | W (error if absent) |
//!
//! Only the explicit-width entry points fail with
//! [`crate::Error::UnsupportedConfiguration`]; the others fall back to the scalar
//! backend.

use fast_stats_core::probe::{self, LaneWidth};
use fast_stats_core::Result;
use tracing::debug;

use crate::config::{best_layout, Layout, Metrics, Precision, StatsConfig};
use crate::dataset;
use crate::record::StatisticsRecord;
use crate::view::DatasetView;

/// Statistics using the best layout this binary supports
///
/// Uses 64-bit precision. Without vector support this is the scalar
/// accumulator over unpacked variables; callers see the same output. Ragged
/// datasets cannot be packed and are reduced unpacked.
pub fn descriptive_statistics<V: AsRef<[f64]>>(dataset: &[V]) -> Result<Vec<StatisticsRecord>> {
    let shape = dataset::validate(dataset, false)?;
    let layout = match shape.rows() {
        Some(_) => best_layout(),
        None => Layout::Unpacked,
    };
    debug!(%layout, "auto-selected layout");
    DatasetView::with_layout(dataset, Precision::Float64, layout)?
        .descriptive_statistics_with(Metrics::BASIC)
}

/// Reference baseline: scalar accumulation of each variable in turn
///
/// Variables may have different lengths.
pub fn descriptive_statistics_unpacked<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    DatasetView::scalar(dataset, Precision::Float64, Layout::Unpacked)?
        .descriptive_statistics_with(Metrics::BASIC)
}

fn packed_default<V: AsRef<[f64]>>(
    dataset: &[V],
    precision: Precision,
) -> Result<Vec<StatisticsRecord>> {
    DatasetView::new(dataset, precision, true)?.descriptive_statistics_with(Metrics::BASIC)
}

fn packed<V: AsRef<[f64]>>(
    dataset: &[V],
    width: LaneWidth,
    precision: Precision,
) -> Result<Vec<StatisticsRecord>> {
    DatasetView::with_layout(dataset, precision, Layout::Packed(width))?
        .descriptive_statistics_with(Metrics::BASIC)
}

/// 32-bit samples, packed at the widest available width
///
/// Without vector support the 128-bit interleaving is reduced by the scalar
/// backend.
pub fn descriptive_statistics_packed_float32<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed_default(dataset, Precision::Float32)
}

/// 64-bit samples, packed at the widest available width
///
/// Falls back like [`descriptive_statistics_packed_float32`].
pub fn descriptive_statistics_packed_float64<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed_default(dataset, Precision::Float64)
}

/// 32-bit samples, four variables per 128-bit register
pub fn descriptive_statistics_packed128_float32<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed(dataset, LaneWidth::W128, Precision::Float32)
}

/// 64-bit samples, two variables per 128-bit register
pub fn descriptive_statistics_packed128_float64<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed(dataset, LaneWidth::W128, Precision::Float64)
}

/// 32-bit samples, eight variables per 256-bit register
pub fn descriptive_statistics_packed256_float32<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed(dataset, LaneWidth::W256, Precision::Float32)
}

/// 64-bit samples, four variables per 256-bit register
pub fn descriptive_statistics_packed256_float64<V: AsRef<[f64]>>(
    dataset: &[V],
) -> Result<Vec<StatisticsRecord>> {
    packed(dataset, LaneWidth::W256, Precision::Float64)
}

/// Statistics under an explicit configuration
pub fn descriptive_statistics_with<V: AsRef<[f64]>>(
    dataset: &[V],
    config: &StatsConfig,
) -> Result<Vec<StatisticsRecord>> {
    DatasetView::from_config(dataset, config)?.descriptive_statistics_with(config.metrics)
}

/// Whether this running binary can use vector instructions
pub fn simd_enabled() -> bool {
    probe::simd_enabled()
}
