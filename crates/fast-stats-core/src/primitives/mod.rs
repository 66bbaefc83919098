//! Computational primitives with compile-time type dispatch
//!
//! # Architecture
//!
//! - Single `ComputePrimitives<T>` trait for every accumulation the statistics need
//! - Concrete backend types: `ScalarBackend`, `SseBackend`, `Avx2Backend`
//! - Vector backends are only constructible after a runtime CPU check
//! - [`Backend`] tags one of them so callers pick once per query
//!
//! # Usage
//!
//! ```rust
//! use fast_stats_core::primitives::{Backend, ComputePrimitives, ScalarBackend};
//!
//! let data = [1.0f64, 2.0, 3.0, 4.0];
//! assert_eq!(ScalarBackend::new().sum(&data[..]), 10.0);
//!
//! // Widest backend the running CPU supports, scalar otherwise
//! let backend = Backend::best_available();
//! assert_eq!(backend.sum(&data[..]), 10.0);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{Avx2Backend, Backend, ScalarBackend, SseBackend};
pub use traits::ComputePrimitives;

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    if Avx2Backend::is_available() {
        return "avx2";
    }
    if SseBackend::is_available() {
        return "sse";
    }
    "scalar"
}
