//! Operation-centric modules for AVX2 compute primitives
//!
//! Each operation is organized in its own module with type-specific implementations

pub mod moments;
pub mod packed;

pub use moments::Accumulate;
pub use packed::PackedAccumulate;
