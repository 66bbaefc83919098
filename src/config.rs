//! Runtime configuration: precision, layout and requested metrics
//!
//! Tokens accepted by the `FromStr` impls:
//!
//! | Type | Tokens |
//! |------|--------|
//! | [`Precision`] | `float`, `float32`, `f32`, `single` / `double`, `float64`, `f64` |
//! | [`Layout`] | `unpacked` / `packed` / `packed128`, `packed-128` / `packed256`, `packed-256` |
//!
//! Anything else fails with [`Error::Configuration`].

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use fast_stats_core::probe::{self, LaneWidth};
use fast_stats_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sample width used for the materialized buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit samples
    Float32,
    /// 64-bit samples
    #[default]
    Float64,
}

impl Precision {
    /// Width of one sample in bits
    pub const fn bits(self) -> usize {
        match self {
            Precision::Float32 => 32,
            Precision::Float64 => 64,
        }
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" | "float32" | "f32" | "single" => Ok(Precision::Float32),
            "double" | "float64" | "f64" => Ok(Precision::Float64),
            _ => Err(Error::unknown_token("precision", s)),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Float32 => f.write_str("float32"),
            Precision::Float64 => f.write_str("float64"),
        }
    }
}

/// Memory arrangement of the materialized buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Layout {
    /// Each variable contiguous and processed on its own
    Unpacked,
    /// `lane_count` variables interleaved per register of the given width
    Packed(LaneWidth),
}

impl Layout {
    /// Packed layout at the widest available width
    ///
    /// Without vector support this is the 128-bit interleaving, which the
    /// scalar backend can still process.
    pub fn default_packed() -> Self {
        Layout::Packed(probe::widest_available().unwrap_or(LaneWidth::W128))
    }

    /// Register width targeted by this layout, `None` when unpacked
    pub fn width(self) -> Option<LaneWidth> {
        match self {
            Layout::Unpacked => None,
            Layout::Packed(width) => Some(width),
        }
    }

    pub fn is_packed(self) -> bool {
        matches!(self, Layout::Packed(_))
    }

    /// Variables advanced per instruction at the given precision
    pub fn lanes(self, precision: Precision) -> usize {
        match self {
            Layout::Unpacked => 1,
            Layout::Packed(width) => lane_count(width, precision),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        best_layout()
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unpacked" => Ok(Layout::Unpacked),
            "packed" => Ok(Layout::default_packed()),
            "packed128" | "packed-128" => Ok(Layout::Packed(LaneWidth::W128)),
            "packed256" | "packed-256" => Ok(Layout::Packed(LaneWidth::W256)),
            _ => Err(Error::unknown_token("layout", s)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Unpacked => f.write_str("unpacked"),
            Layout::Packed(width) => write!(f, "packed-{}", width.bits()),
        }
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.to_string()
    }
}

impl TryFrom<String> for Layout {
    type Error = Error;

    fn try_from(token: String) -> Result<Self> {
        token.parse()
    }
}

/// Number of `precision` samples held by one register of `width`
pub fn lane_count(width: LaneWidth, precision: Precision) -> usize {
    width.bits() / precision.bits()
}

/// Widest packed layout this binary can execute, else unpacked
pub fn best_layout() -> Layout {
    probe::widest_available().map_or(Layout::Unpacked, Layout::Packed)
}

/// Every layout this binary can execute with vector instructions, plus unpacked
pub fn available_layouts() -> Vec<Layout> {
    std::iter::once(Layout::Unpacked)
        .chain(probe::available_widths().into_iter().map(Layout::Packed))
        .collect()
}

bitflags! {
    /// Metrics a statistics query should produce
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Metrics: u8 {
        const MIN = 0b0000_0001;
        const MAX = 0b0000_0010;
        const MEAN = 0b0000_0100;
        const VARIANCE = 0b0000_1000;
        const STANDARD_DEVIATION = 0b0001_0000;
        const MEDIAN = 0b0010_0000;
        const Q1 = 0b0100_0000;
        const Q3 = 0b1000_0000;

        /// Single-pass moments
        const BASIC = Self::MIN.bits()
            | Self::MAX.bits()
            | Self::MEAN.bits()
            | Self::VARIANCE.bits()
            | Self::STANDARD_DEVIATION.bits();
        /// Order statistics (requires a sort per variable)
        const QUARTILES = Self::MEDIAN.bits() | Self::Q1.bits() | Self::Q3.bits();
        const ALL = Self::BASIC.bits() | Self::QUARTILES.bits();
    }
}

impl Metrics {
    /// Metric names as they appear in a [`StatisticsRecord`](crate::StatisticsRecord)
    pub const NAMES: [(&'static str, Metrics); 8] = [
        ("min", Metrics::MIN),
        ("max", Metrics::MAX),
        ("mean", Metrics::MEAN),
        ("variance", Metrics::VARIANCE),
        ("standard_deviation", Metrics::STANDARD_DEVIATION),
        ("median", Metrics::MEDIAN),
        ("q1", Metrics::Q1),
        ("q3", Metrics::Q3),
    ];

    /// Flag for a single metric name
    pub fn by_metric_name(name: &str) -> Option<Metrics> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, flag)| flag)
    }

    /// Whether any moment beyond the mean is requested
    pub fn needs_moments(self) -> bool {
        self.intersects(Metrics::MIN | Metrics::MAX | Metrics::VARIANCE | Metrics::STANDARD_DEVIATION)
    }

    /// Whether any order statistic is requested
    pub fn needs_quantiles(self) -> bool {
        self.intersects(Metrics::QUARTILES)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::BASIC
    }
}

impl FromStr for Metrics {
    type Err = Error;

    /// Comma-separated metric names, or one of `basic`, `quartiles`, `all`
    fn from_str(s: &str) -> Result<Self> {
        let mut metrics = Metrics::empty();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            metrics |= match token.to_ascii_lowercase().as_str() {
                "basic" => Metrics::BASIC,
                "quartiles" => Metrics::QUARTILES,
                "all" => Metrics::ALL,
                name => Metrics::by_metric_name(name)
                    .ok_or_else(|| Error::unknown_token("metric", token))?,
            };
        }
        Ok(metrics)
    }
}

/// A complete query configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub precision: Precision,
    pub layout: Layout,
    pub metrics: Metrics,
    /// Process a packed layout on the scalar backend when its width is
    /// unavailable, instead of failing with `UnsupportedConfiguration`
    pub width_fallback: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new(Precision::Float64, best_layout())
    }
}

impl StatsConfig {
    /// Configuration pinned to `layout`; unavailable widths are errors
    pub fn new(precision: Precision, layout: Layout) -> Self {
        Self {
            precision,
            layout,
            metrics: Metrics::BASIC,
            width_fallback: false,
        }
    }

    /// Packed at the widest available width, scalar-processed without one
    pub fn default_packed(precision: Precision) -> Self {
        Self::new(precision, Layout::default_packed()).with_width_fallback()
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_width_fallback(mut self) -> Self {
        self.width_fallback = true;
        self
    }

    /// Parse precision and layout tokens
    ///
    /// Plain `"packed"` names no width and never fails for lack of vector
    /// support; `"packed128"` and `"packed256"` pin theirs.
    pub fn from_tokens(precision: &str, layout: &str) -> Result<Self> {
        let precision: Precision = precision.parse()?;
        if layout.trim().eq_ignore_ascii_case("packed") {
            return Ok(Self::default_packed(precision));
        }
        Ok(Self::new(precision, layout.parse()?))
    }
}
