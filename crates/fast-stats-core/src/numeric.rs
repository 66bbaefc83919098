//! Sample precision trait
//!
//! Statistics are computed over 32-bit or 64-bit floating-point samples. The
//! `Sample` trait ties a storage type to its bit width and to the conversions
//! the accumulators need; results are always reported as `f64`.

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// Floating-point sample type usable by every backend
pub trait Sample: Pod + Float + Debug + Default + Send + Sync + 'static {
    /// Width of one sample in bits
    const BITS: usize;

    /// Human-readable type name
    const NAME: &'static str;

    /// Narrow (or pass through) an `f64` input sample
    fn narrow(val: f64) -> Self;

    /// Widen to `f64` for final arithmetic
    fn widen(self) -> f64;

    /// Number of samples held by a vector register of `register_bits`
    #[inline]
    fn lanes(register_bits: usize) -> usize {
        register_bits / Self::BITS
    }
}

impl Sample for f32 {
    const BITS: usize = 32;
    const NAME: &'static str = "f32";

    #[inline]
    fn narrow(val: f64) -> Self {
        val as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    const BITS: usize = 64;
    const NAME: &'static str = "f64";

    #[inline]
    fn narrow(val: f64) -> Self {
        val
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_counts() {
        assert_eq!(f32::lanes(128), 4);
        assert_eq!(f32::lanes(256), 8);
        assert_eq!(f64::lanes(128), 2);
        assert_eq!(f64::lanes(256), 4);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f64 as Sample>::narrow(0.25), 0.25);
        assert_eq!(<f32 as Sample>::narrow(0.25), 0.25f32);
        assert_eq!(Sample::widen(1.5f32), 1.5);
    }
}
