//! Order-statistic quantiles
//!
//! This crate provides the R-7 linear interpolation estimator used for the
//! median and quartiles of descriptive statistics records.
//!
//! # Example
//!
//! ```rust
//! use fast_stats_quantile::{LinearInterpolation, QuantileEstimator, Quartiles};
//!
//! let data = [4.0f64, 1.0, 3.0, 2.0];
//! let median = LinearInterpolation::new().quantile(&data[..], 0.5).unwrap();
//! assert_eq!(median, 2.5);
//!
//! let q = Quartiles::compute(&data[..]).unwrap();
//! assert_eq!(q.q1, 1.75);
//! ```

pub mod error;
pub mod linear;
pub mod quartiles;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use linear::LinearInterpolation;
pub use quartiles::{median, Quartiles};
pub use traits::{sorted_copy, QuantileEstimator};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, LinearInterpolation, QuantileEstimator, Quartiles, Result};
}
