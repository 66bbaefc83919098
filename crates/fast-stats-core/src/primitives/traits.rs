//! Unified compute primitives trait

use crate::moments::Moments;
use crate::numeric::Sample;

use super::backends::scalar;

/// Low-level accumulation operations with compile-time backend dispatch
///
/// Two data arrangements are supported:
///
/// - **contiguous**: one variable's samples back to back (`sum`, `moments`)
/// - **packed group**: `rows × lanes` samples where element `r * lanes + l`
///   is sample `r` of lane `l` (`packed_sums`, `packed_moments`)
///
/// The default bodies are the scalar reference algorithms; vector backends
/// override them and fall back to these when a group's lane count does not
/// match their register.
pub trait ComputePrimitives<T: Sample>: Clone + Copy + Send + Sync + std::fmt::Debug {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Bit width of the register this backend advances per instruction
    fn register_bits(&self) -> usize {
        T::BITS
    }

    /// Number of samples processed per instruction
    fn simd_width(&self) -> usize {
        self.register_bits() / T::BITS
    }

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> f64 {
        scalar::sum_scalar(data)
    }

    /// Sum, sum of squares and extrema of a contiguous variable
    fn moments(&self, data: &[T]) -> Moments {
        Moments::from_slice(data)
    }

    /// Per-lane sums of a packed group, written to `out[..lanes]`
    fn packed_sums(&self, group: &[T], lanes: usize, out: &mut [f64]) {
        scalar::packed_sums_scalar(group, lanes, out)
    }

    /// Per-lane moments of a packed group, written to `out[..lanes]`
    fn packed_moments(&self, group: &[T], lanes: usize, out: &mut [Moments]) {
        scalar::packed_moments_scalar(group, lanes, out)
    }
}
