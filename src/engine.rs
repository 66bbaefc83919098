//! Accumulation over materialized buffers
//!
//! Generic over the sample type and the primitives backend. Unpacked buffers
//! are reduced one variable at a time; packed buffers one group of `lanes`
//! variables at a time, discarding padding lanes.

use fast_stats_core::{ComputePrimitives, Moments, Result, Sample};
use fast_stats_quantile::Quartiles;
use tracing::trace;

use crate::config::Metrics;
use crate::packing::{Buffer, PackedBuffer, UnpackedBuffer};
use crate::record::StatisticsRecord;

/// Per-variable moments in dataset order
pub fn moments<T, P>(primitives: &P, buffer: &Buffer<T>) -> Vec<Moments>
where
    T: Sample,
    P: ComputePrimitives<T>,
{
    match buffer {
        Buffer::Unpacked(b) => moments_unpacked(primitives, b),
        Buffer::Packed(b) => moments_packed(primitives, b),
    }
}

fn moments_unpacked<T, P>(primitives: &P, buffer: &UnpackedBuffer<T>) -> Vec<Moments>
where
    T: Sample,
    P: ComputePrimitives<T>,
{
    buffer.iter().map(|variable| primitives.moments(variable)).collect()
}

fn moments_packed<T, P>(primitives: &P, buffer: &PackedBuffer<T>) -> Vec<Moments>
where
    T: Sample,
    P: ComputePrimitives<T>,
{
    let lanes = buffer.lanes();
    let mut lane_moments = vec![Moments::new(); lanes];
    let mut all = Vec::with_capacity(buffer.num_variables());
    for (group, real) in buffer.groups() {
        primitives.packed_moments(group, lanes, &mut lane_moments);
        all.extend_from_slice(&lane_moments[..real]);
    }
    all
}

/// Per-variable means in dataset order, without extrema or squares
pub fn means<T, P>(primitives: &P, buffer: &Buffer<T>) -> Vec<f64>
where
    T: Sample,
    P: ComputePrimitives<T>,
{
    match buffer {
        Buffer::Unpacked(b) => b
            .iter()
            .map(|variable| primitives.sum(variable) / variable.len() as f64)
            .collect(),
        Buffer::Packed(b) => {
            let lanes = b.lanes();
            let rows = b.rows() as f64;
            let mut sums = vec![0.0; lanes];
            let mut all = Vec::with_capacity(b.num_variables());
            for (group, real) in b.groups() {
                primitives.packed_sums(group, lanes, &mut sums);
                all.extend(sums[..real].iter().map(|s| s / rows));
            }
            all
        }
    }
}

/// One record per variable with the requested metrics
pub fn describe<T, P>(
    primitives: &P,
    buffer: &Buffer<T>,
    metrics: Metrics,
) -> Result<Vec<StatisticsRecord>>
where
    T: Sample,
    P: ComputePrimitives<T>,
{
    let mut records = if metrics.needs_moments() {
        moments(primitives, buffer)
            .iter()
            .map(|m| Ok(StatisticsRecord::from_summary(&m.finalize()?, metrics)))
            .collect::<Result<Vec<_>>>()?
    } else if metrics.contains(Metrics::MEAN) {
        means(primitives, buffer)
            .into_iter()
            .map(StatisticsRecord::from_mean)
            .collect()
    } else {
        vec![StatisticsRecord::default(); buffer.num_variables()]
    };

    if metrics.needs_quantiles() {
        for (index, record) in records.iter_mut().enumerate() {
            let Some(samples) = buffer.variable(index) else {
                continue;
            };
            let quartiles = Quartiles::compute(&samples)?;
            trace!(index, median = quartiles.median, "quartiles");
            *record = record.with_quartiles(&quartiles, metrics);
        }
    }

    Ok(records)
}
