//! Operation-centric modules for SSE compute primitives

pub mod moments;
pub mod packed;

pub use moments::Accumulate;
pub use packed::PackedAccumulate;
