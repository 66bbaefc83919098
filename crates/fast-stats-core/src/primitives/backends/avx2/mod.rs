//! AVX2 backend implementation (256-bit registers)
//!
//! This module provides AVX2-optimized implementations with compile-time
//! type dispatch to eliminate runtime overhead. Operations are organized
//! by primitive type for better modularity and testing.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod utils;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::ComputePrimitives;
use crate::probe;
use crate::{Error, Result};

/// AVX2 backend for x86_64 processors
///
/// Only obtainable through [`Avx2Backend::try_new`], so holding one proves the
/// running CPU executes AVX2.
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    _verified: (),
}

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// Fails with [`Error::UnsupportedConfiguration`] if the build lacks the
    /// `avx2` feature or the CPU doesn't support AVX2 instructions.
    pub fn try_new() -> Result<Self> {
        if Self::is_available() {
            Ok(Self { _verified: () })
        } else {
            Err(Error::unsupported_width(256))
        }
    }

    /// Check if AVX2 is compiled in and available on this CPU
    pub fn is_available() -> bool {
        probe::cpu_features().avx2
    }
}

// AVX2 implementations delegate to type-specific modules via compile-time dispatch
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<T> ComputePrimitives<T> for Avx2Backend
where
    T: Sample + self::dispatch::Avx2TypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn register_bits(&self) -> usize {
        256
    }

    fn simd_width(&self) -> usize {
        T::simd_width()
    }

    fn sum(&self, data: &[T]) -> f64 {
        // Safety: CPU support was verified in try_new()
        unsafe { T::sum_impl(self, data) }
    }

    fn moments(&self, data: &[T]) -> Moments {
        // Safety: CPU support was verified in try_new()
        unsafe { T::moments_impl(self, data) }
    }

    fn packed_sums(&self, group: &[T], lanes: usize, out: &mut [f64]) {
        if lanes != T::simd_width() {
            return super::scalar::packed_sums_scalar(group, lanes, out);
        }
        // Safety: CPU support was verified in try_new()
        unsafe { T::packed_sums_impl(self, group, out) }
    }

    fn packed_moments(&self, group: &[T], lanes: usize, out: &mut [Moments]) {
        if lanes != T::simd_width() {
            return super::scalar::packed_moments_scalar(group, lanes, out);
        }
        // Safety: CPU support was verified in try_new()
        unsafe { T::packed_moments_impl(self, group, out) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<T: Sample> ComputePrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}
