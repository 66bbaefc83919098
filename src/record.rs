//! Per-variable statistics records

use std::collections::BTreeMap;

use fast_stats_core::Summary;
use fast_stats_quantile::Quartiles;
use serde::{Deserialize, Serialize};

use crate::config::Metrics;

/// Metric name to value mapping for one variable
///
/// Only the requested metrics are present. The default entry points fill the
/// five moment metrics; quantiles appear when a query asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<f64>,
}

impl StatisticsRecord {
    /// Keep the requested subset of a finalized summary
    pub fn from_summary(summary: &Summary, metrics: Metrics) -> Self {
        let pick = |flag: Metrics, value: f64| metrics.contains(flag).then_some(value);
        Self {
            min: pick(Metrics::MIN, summary.min),
            max: pick(Metrics::MAX, summary.max),
            mean: pick(Metrics::MEAN, summary.mean),
            variance: pick(Metrics::VARIANCE, summary.variance),
            standard_deviation: pick(Metrics::STANDARD_DEVIATION, summary.standard_deviation),
            ..Self::default()
        }
    }

    /// Mean-only record
    pub fn from_mean(mean: f64) -> Self {
        Self {
            mean: Some(mean),
            ..Self::default()
        }
    }

    /// Add the requested quartiles
    pub fn with_quartiles(mut self, quartiles: &Quartiles, metrics: Metrics) -> Self {
        self.median = metrics.contains(Metrics::MEDIAN).then_some(quartiles.median);
        self.q1 = metrics.contains(Metrics::Q1).then_some(quartiles.q1);
        self.q3 = metrics.contains(Metrics::Q3).then_some(quartiles.q3);
        self
    }

    /// Value of a metric by name (`"min"`, `"standard_deviation"`, `"q3"`, ...)
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "min" => self.min,
            "max" => self.max,
            "mean" => self.mean,
            "variance" => self.variance,
            "standard_deviation" => self.standard_deviation,
            "median" => self.median,
            "q1" => self.q1,
            "q3" => self.q3,
            _ => None,
        }
    }

    /// Metrics present in this record
    pub fn metrics(&self) -> Metrics {
        Metrics::NAMES
            .iter()
            .filter(|(name, _)| self.get(name).is_some())
            .fold(Metrics::empty(), |acc, &(_, flag)| acc | flag)
    }

    /// Present metrics keyed by name
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        Metrics::NAMES
            .iter()
            .filter_map(|&(name, _)| self.get(name).map(|v| (name, v)))
            .collect()
    }
}
