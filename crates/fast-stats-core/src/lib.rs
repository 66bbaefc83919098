//! Core types and compute primitives for SIMD descriptive statistics
//!
//! This crate provides the building blocks the `fast-stats` facade composes:
//!
//! 1. **Samples** - [`Sample`] ties `f32`/`f64` storage to register lane counts
//! 2. **Moments** - [`Moments`] accumulates count, sum, sum of squares and
//!    extrema, and finalizes into a [`Summary`]
//! 3. **Primitives** - [`ComputePrimitives`] with scalar, SSE and AVX2
//!    backends, selected through [`Backend`]
//! 4. **Probing** - [`probe`] reports which register widths the running CPU
//!    and this build support
//!
//! # Example
//!
//! ```rust
//! use fast_stats_core::{Backend, ComputePrimitives};
//!
//! let data = [0.6374f32, 0.0500, 0.5651, 0.3710];
//! let backend = Backend::best_available();
//! let summary = backend.moments(&data[..]).finalize().unwrap();
//!
//! assert!((summary.mean - 0.405875).abs() < 1e-6);
//! ```

pub mod error;
pub mod moments;
pub mod numeric;
pub mod primitives;
pub mod probe;
pub mod workspace;

pub use error::{Error, Result};
pub use moments::{scalar_summary, Moments, Summary};
pub use numeric::Sample;
pub use primitives::{
    best_backend_name, Avx2Backend, Backend, ComputePrimitives, ScalarBackend,
    SseBackend,
};
pub use probe::{cpu_features, simd_enabled, CpuFeatures, LaneWidth};
pub use workspace::{AlignedBuffer, SIMD_ALIGNMENT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Backend, ComputePrimitives, Error, LaneWidth, Moments, Result, Sample, ScalarBackend,
        Summary,
    };
}
