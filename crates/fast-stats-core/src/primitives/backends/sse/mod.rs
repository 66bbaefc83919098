//! SSE backend implementation (128-bit registers)
//!
//! Mirrors the AVX2 backend's layout: per-operation modules with f32/f64
//! implementations selected through [`dispatch::SseTypeDispatch`].

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod ops;
#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod utils;

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
use crate::moments::Moments;
use crate::numeric::Sample;
use crate::primitives::ComputePrimitives;
use crate::probe;
use crate::{Error, Result};

/// SSE backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct SseBackend {
    _verified: (),
}

impl SseBackend {
    /// Create a new SSE backend
    ///
    /// Fails with [`Error::UnsupportedConfiguration`] if the build lacks the
    /// `sse` feature or the CPU doesn't support SSE2 instructions.
    pub fn try_new() -> Result<Self> {
        if Self::is_available() {
            Ok(Self { _verified: () })
        } else {
            Err(Error::unsupported_width(128))
        }
    }

    /// Check if SSE2 is compiled in and available on this CPU
    pub fn is_available() -> bool {
        probe::cpu_features().sse2
    }
}

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
impl<T> ComputePrimitives<T> for SseBackend
where
    T: Sample + self::dispatch::SseTypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        "sse"
    }

    fn register_bits(&self) -> usize {
        128
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

// Fallback for non-SSE builds
#[cfg(not(all(target_arch = "x86_64", feature = "sse")))]
impl<T: Sample> ComputePrimitives<T> for SseBackend {
    fn backend_name(&self) -> &'static str {
        "sse (unavailable)"
    }
}
