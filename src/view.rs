//! Dataset views: a materialized buffer plus the backend chosen for it
//!
//! Construction validates the dataset, converts it to the requested precision
//! and layout, and picks the backend once. Queries only read the buffer, so a
//! view can be queried repeatedly and shared across threads.

use fast_stats_core::{Backend, ComputePrimitives, Error, Result, Sample};
use tracing::{debug, instrument};

use crate::config::{Layout, Metrics, Precision, StatsConfig};
use crate::dataset;
use crate::engine;
use crate::packing::{Buffer, PackedBuffer, UnpackedBuffer};
use crate::record::StatisticsRecord;

#[derive(Debug)]
enum Materialized {
    Float32(Buffer<f32>),
    Float64(Buffer<f64>),
}

/// Immutable, query-ready copy of a dataset
#[derive(Debug)]
pub struct DatasetView {
    data: Materialized,
    precision: Precision,
    layout: Layout,
    backend: Backend,
}

impl DatasetView {
    /// Build a view with the default layout for `packed`
    ///
    /// `packed = true` interleaves at the widest available width. Without any
    /// vector support the 128-bit interleaving is used and processed by the
    /// scalar backend; results are the same, only throughput differs.
    /// `packed = false` keeps variables contiguous and reduces each one with
    /// the best available backend.
    pub fn new<V: AsRef<[f64]>>(dataset: &[V], precision: Precision, packed: bool) -> Result<Self> {
        if !packed {
            return Self::build(dataset, precision, Layout::Unpacked, Backend::best_available());
        }
        Self::from_config(dataset, &StatsConfig::default_packed(precision))
    }

    /// Build a view with an explicit layout
    ///
    /// Fails with [`Error::UnsupportedConfiguration`] when a packed layout's
    /// instruction set is not available.
    pub fn with_layout<V: AsRef<[f64]>>(
        dataset: &[V],
        precision: Precision,
        layout: Layout,
    ) -> Result<Self> {
        let backend = match layout {
            Layout::Unpacked => Backend::best_available(),
            Layout::Packed(width) => {
                // Shape errors take precedence over capability errors
                dataset::validate(dataset, true)?;
                Backend::for_width(width)?
            }
        };
        Self::build(dataset, precision, layout, backend)
    }

    /// Build a view from precision and layout tokens
    ///
    /// Parsed by [`StatsConfig::from_tokens`]; plain `"packed"` behaves like
    /// [`DatasetView::new`] with `packed = true`.
    pub fn from_tokens<V: AsRef<[f64]>>(dataset: &[V], precision: &str, layout: &str) -> Result<Self> {
        Self::from_config(dataset, &StatsConfig::from_tokens(precision, layout)?)
    }

    /// Build a view from a full configuration
    pub fn from_config<V: AsRef<[f64]>>(dataset: &[V], config: &StatsConfig) -> Result<Self> {
        match config.layout {
            Layout::Packed(width) if config.width_fallback && !width.is_available() => {
                debug!(%width, "width unavailable, packing for the scalar backend");
                Self::build(dataset, config.precision, config.layout, Backend::scalar())
            }
            layout => Self::with_layout(dataset, config.precision, layout),
        }
    }

    /// Build a view with the scalar backend regardless of vector support
    pub fn scalar<V: AsRef<[f64]>>(dataset: &[V], precision: Precision, layout: Layout) -> Result<Self> {
        Self::build(dataset, precision, layout, Backend::scalar())
    }

    #[instrument(skip_all, fields(variables = dataset.len(), precision = %precision, layout = %layout))]
    fn build<V: AsRef<[f64]>>(
        dataset: &[V],
        precision: Precision,
        layout: Layout,
        backend: Backend,
    ) -> Result<Self> {
        dataset::validate(dataset, layout.is_packed())?;

        let data = match precision {
            Precision::Float32 => Materialized::Float32(materialize(dataset, layout)?),
            Precision::Float64 => Materialized::Float64(materialize(dataset, layout)?),
        };

        let view = Self {
            data,
            precision,
            layout,
            backend,
        };
        debug!(backend = view.backend_name(), "materialized dataset view");
        Ok(view)
    }

    /// Per-variable means, in dataset order
    pub fn mean(&self) -> Vec<f64> {
        match &self.data {
            Materialized::Float32(buffer) => engine::means(&self.backend, buffer),
            Materialized::Float64(buffer) => engine::means(&self.backend, buffer),
        }
    }

    /// Moments plus median and quartiles for every variable
    pub fn descriptive_statistics(&self) -> Result<Vec<StatisticsRecord>> {
        self.descriptive_statistics_with(Metrics::ALL)
    }

    /// Only the requested metrics for every variable
    pub fn descriptive_statistics_with(&self, metrics: Metrics) -> Result<Vec<StatisticsRecord>> {
        if metrics.is_empty() {
            return Err(Error::Configuration("no metrics requested".to_string()));
        }
        match &self.data {
            Materialized::Float32(buffer) => engine::describe(&self.backend, buffer, metrics),
            Materialized::Float64(buffer) => engine::describe(&self.backend, buffer, metrics),
        }
    }

    pub fn num_variables(&self) -> usize {
        match &self.data {
            Materialized::Float32(buffer) => buffer.num_variables(),
            Materialized::Float64(buffer) => buffer.num_variables(),
        }
    }

    /// Common sample count, `None` for ragged unpacked views
    pub fn rows(&self) -> Option<usize> {
        match &self.data {
            Materialized::Float32(buffer) => rows(buffer),
            Materialized::Float64(buffer) => rows(buffer),
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Name of the backend reducing this view (`"scalar"`, `"sse"`, `"avx2"`)
    pub fn backend_name(&self) -> &'static str {
        match self.precision {
            Precision::Float32 => ComputePrimitives::<f32>::backend_name(&self.backend),
            Precision::Float64 => ComputePrimitives::<f64>::backend_name(&self.backend),
        }
    }
}

fn materialize<T: Sample, V: AsRef<[f64]>>(dataset: &[V], layout: Layout) -> Result<Buffer<T>> {
    Ok(match layout {
        Layout::Unpacked => Buffer::Unpacked(UnpackedBuffer::from_dataset(dataset)?),
        Layout::Packed(width) => Buffer::Packed(PackedBuffer::pack(dataset, width.lanes::<T>())?),
    })
}

fn rows<T: Sample>(buffer: &Buffer<T>) -> Option<usize> {
    match buffer {
        Buffer::Packed(b) => Some(b.rows()),
        Buffer::Unpacked(b) => {
            let mut lengths = b.iter().map(<[T]>::len);
            let first = lengths.next()?;
            lengths.all(|n| n == first).then_some(first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fast_stats_core::LaneWidth;

    fn data() -> Vec<Vec<f64>> {
        vec![
            vec![0.6269, 0.3783, 0.1477, 0.2374],
            vec![0.4209, 0.1055, 0.8000, 0.2023],
        ]
    }

    #[test]
    fn test_view_introspection() {
        let view = DatasetView::new(&data(), Precision::Float32, true).unwrap();
        assert_eq!(view.num_variables(), 2);
        assert_eq!(view.rows(), Some(4));
        assert_eq!(view.precision(), Precision::Float32);
        assert!(view.layout().is_packed());
    }

    #[test]
    fn test_scalar_view_has_scalar_backend() {
        let view = DatasetView::scalar(&data(), Precision::Float64, Layout::Packed(LaneWidth::W256)).unwrap();
        assert_eq!(view.backend_name(), "scalar");
        assert_eq!(view.descriptive_statistics().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_metric_set_rejected() {
        let view = DatasetView::new(&data(), Precision::Float64, false).unwrap();
        assert!(matches!(
            view.descriptive_statistics_with(Metrics::empty()),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_width_fallback_uses_scalar_backend_when_absent() {
        for width in [LaneWidth::W128, LaneWidth::W256] {
            let config = StatsConfig::new(Precision::Float32, Layout::Packed(width)).with_width_fallback();
            let view = DatasetView::from_config(&data(), &config).unwrap();
            assert_eq!(view.layout(), Layout::Packed(width));
            if !width.is_available() {
                assert_eq!(view.backend_name(), "scalar");
            }

            let pinned = StatsConfig::new(Precision::Float32, Layout::Packed(width));
            assert_eq!(
                DatasetView::from_config(&data(), &pinned).is_ok(),
                width.is_available()
            );
        }
    }

    #[test]
    fn test_from_tokens() {
        let view = DatasetView::from_tokens(&data(), "double", "unpacked").unwrap();
        assert_eq!(view.layout(), Layout::Unpacked);
        let view = DatasetView::from_tokens(&data(), "float", "packed").unwrap();
        assert!(view.layout().is_packed());
        assert!(matches!(
            DatasetView::from_tokens(&data(), "quad", "packed"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            DatasetView::from_tokens(&data(), "float", "sideways"),
            Err(Error::Configuration(_))
        ));
    }
}
