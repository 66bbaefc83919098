//! Descriptive statistics over batches of variables with SIMD packing
//!
//! A dataset is an ordered collection of variables, each an ordered sequence
//! of `f64` samples. Every entry point returns one [`StatisticsRecord`] per
//! variable with its minimum, maximum, mean, population variance and standard
//! deviation; [`DatasetView`] additionally reports median and quartiles.
//!
//! # Strategies
//!
//! - **Unpacked**: each variable contiguous, reduced on its own.
//! - **Packed**: variables interleaved so one 128-bit or 256-bit instruction
//!   advances 2-8 variables at once; the last group is zero-padded.
//!
//! All strategies agree within `1e-9` (64-bit) or `1e-6` (32-bit).
//!
//! # Example
//!
//! ```rust
//! use fast_stats::{descriptive_statistics, DatasetView, Precision};
//!
//! let dataset = vec![
//!     vec![0.6269, 0.3783, 0.1477, 0.2374],
//!     vec![0.4209, 0.1055, 0.8000, 0.2023],
//! ];
//!
//! let records = descriptive_statistics(&dataset).unwrap();
//! assert!((records[0].mean.unwrap() - 0.347575).abs() < 1e-9);
//!
//! // Materialize once, query repeatedly
//! let view = DatasetView::new(&dataset, Precision::Float32, true).unwrap();
//! let means = view.mean();
//! let full = view.descriptive_statistics().unwrap();
//! assert_eq!(means.len(), 2);
//! assert!(full[1].median.is_some());
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod packing;
pub mod record;
pub mod view;

pub use api::{
    descriptive_statistics, descriptive_statistics_packed128_float32,
    descriptive_statistics_packed128_float64, descriptive_statistics_packed256_float32,
    descriptive_statistics_packed256_float64, descriptive_statistics_packed_float32,
    descriptive_statistics_packed_float64, descriptive_statistics_unpacked,
    descriptive_statistics_with, simd_enabled,
};
pub use config::{available_layouts, best_layout, lane_count, Layout, Metrics, Precision, StatsConfig};
pub use packing::{PackedBuffer, UnpackedBuffer};
pub use record::StatisticsRecord;
pub use view::DatasetView;

// Re-export from the workspace crates
pub use fast_stats_core::{probe, Error, LaneWidth, Result};
pub use fast_stats_quantile::{LinearInterpolation, QuantileEstimator, Quartiles};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        descriptive_statistics, DatasetView, Error, Layout, Metrics, Precision, Result,
        StatisticsRecord, StatsConfig,
    };
}
