//! Capability probing for vector instruction sets
//!
//! A width counts as available only when it was compiled in (cargo features
//! `sse` / `avx2` on x86_64) *and* the running CPU reports it. Detection runs
//! once per process.

use std::fmt;
use std::sync::OnceLock;

use crate::numeric::Sample;

/// Vector instruction sets usable by this binary on this CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// 128-bit registers (SSE2)
    pub sse2: bool,
    /// 256-bit registers (AVX2)
    pub avx2: bool,
}

/// Register width of a vector backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneWidth {
    /// 128-bit registers: 4 × f32 or 2 × f64
    W128,
    /// 256-bit registers: 8 × f32 or 4 × f64
    W256,
}

impl LaneWidth {
    /// Register width in bits
    pub const fn bits(self) -> usize {
        match self {
            LaneWidth::W128 => 128,
            LaneWidth::W256 => 256,
        }
    }

    /// Number of `T` values held by one register of this width
    pub fn lanes<T: Sample>(self) -> usize {
        T::lanes(self.bits())
    }

    /// Whether this width is usable in the running process
    pub fn is_available(self) -> bool {
        is_width_available(self)
    }
}

impl fmt::Display for LaneWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Cached CPU feature probe
pub fn cpu_features() -> CpuFeatures {
    static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();
    *FEATURES.get_or_init(|| {
        let features = detect();
        log::debug!(
            "vector support: sse2={} avx2={}",
            features.sse2,
            features.avx2
        );
        features
    })
}

fn detect() -> CpuFeatures {
    #[allow(unused_mut)]
    let mut features = CpuFeatures::default();

    #[cfg(all(target_arch = "x86_64", feature = "sse"))]
    {
        features.sse2 = is_x86_feature_detected!("sse2");
    }

    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        features.avx2 = is_x86_feature_detected!("avx2");
    }

    features
}

/// True when any vector instruction set is usable
pub fn simd_enabled() -> bool {
    let features = cpu_features();
    features.sse2 || features.avx2
}

/// Whether the given register width is usable
pub fn is_width_available(width: LaneWidth) -> bool {
    let features = cpu_features();
    match width {
        LaneWidth::W128 => features.sse2,
        LaneWidth::W256 => features.avx2,
    }
}

/// Widest usable register width, if any
pub fn widest_available() -> Option<LaneWidth> {
    available_widths().into_iter().max()
}

/// All usable register widths, narrowest first
pub fn available_widths() -> Vec<LaneWidth> {
    [LaneWidth::W128, LaneWidth::W256]
        .into_iter()
        .filter(|&w| is_width_available(w))
        .collect()
}
