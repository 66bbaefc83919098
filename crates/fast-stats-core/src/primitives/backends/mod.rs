//! Backend implementations without delegation
//!
//! This module provides concrete backend types with direct implementations,
//! plus the [`Backend`] tag that picks one of them once at configuration time.

pub mod avx2;
pub mod scalar;
pub mod sse;

pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;
pub use sse::SseBackend;

use super::ComputePrimitives;
use crate::moments::Moments;
use crate::numeric::Sample;
use crate::probe::{self, LaneWidth};
use crate::Result;

/// Backend selected at configuration time
///
/// Every operation matches on the tag and forwards to the concrete backend,
/// so the choice is made once per query rather than per sample.
#[derive(Clone, Copy, Debug)]
pub enum Backend {
    Scalar(ScalarBackend),
    Sse(SseBackend),
    Avx2(Avx2Backend),
}

impl Backend {
    /// Reference scalar backend
    pub fn scalar() -> Self {
        Backend::Scalar(ScalarBackend::new())
    }

    /// Backend for an explicit register width
    ///
    /// Fails with `UnsupportedConfiguration` when the width is not available in
    /// this binary; explicit requests are never downgraded.
    pub fn for_width(width: LaneWidth) -> Result<Self> {
        match width {
            LaneWidth::W128 => SseBackend::try_new().map(Backend::Sse),
            LaneWidth::W256 => Avx2Backend::try_new().map(Backend::Avx2),
        }
    }

    /// Widest available vector backend, or scalar when none is
    pub fn best_available() -> Self {
        let backend = probe::widest_available()
            .and_then(|width| Self::for_width(width).ok())
            .unwrap_or_else(Self::scalar);
        log::trace!("best available backend: {:?}", backend.width());
        backend
    }

    /// Register width of the tagged backend, `None` for scalar
    pub fn width(&self) -> Option<LaneWidth> {
        match self {
            Backend::Scalar(_) => None,
            Backend::Sse(_) => Some(LaneWidth::W128),
            Backend::Avx2(_) => Some(LaneWidth::W256),
        }
    }
}

impl<T: Sample> ComputePrimitives<T> for Backend
where
    ScalarBackend: ComputePrimitives<T>,
    SseBackend: ComputePrimitives<T>,
    Avx2Backend: ComputePrimitives<T>,
{
    fn backend_name(&self) -> &'static str {
        match self {
            Backend::Scalar(b) => ComputePrimitives::<T>::backend_name(b),
            Backend::Sse(b) => ComputePrimitives::<T>::backend_name(b),
            Backend::Avx2(b) => ComputePrimitives::<T>::backend_name(b),
        }
    }

    fn register_bits(&self) -> usize {
        match self {
            Backend::Scalar(b) => ComputePrimitives::<T>::register_bits(b),
            Backend::Sse(b) => ComputePrimitives::<T>::register_bits(b),
            Backend::Avx2(b) => ComputePrimitives::<T>::register_bits(b),
        }
    }

    fn sum(&self, data: &[T]) -> f64 {
        match self {
            Backend::Scalar(b) => b.sum(data),
            Backend::Sse(b) => b.sum(data),
            Backend::Avx2(b) => b.sum(data),
        }
    }

    fn moments(&self, data: &[T]) -> Moments {
        match self {
            Backend::Scalar(b) => b.moments(data),
            Backend::Sse(b) => b.moments(data),
            Backend::Avx2(b) => b.moments(data),
        }
    }

    fn packed_sums(&self, group: &[T], lanes: usize, out: &mut [f64]) {
        match self {
            Backend::Scalar(b) => b.packed_sums(group, lanes, out),
            Backend::Sse(b) => b.packed_sums(group, lanes, out),
            Backend::Avx2(b) => b.packed_sums(group, lanes, out),
        }
    }

    fn packed_moments(&self, group: &[T], lanes: usize, out: &mut [Moments]) {
        match self {
            Backend::Scalar(b) => b.packed_moments(group, lanes, out),
            Backend::Sse(b) => b.packed_moments(group, lanes, out),
            Backend::Avx2(b) => b.packed_moments(group, lanes, out),
        }
    }
}
