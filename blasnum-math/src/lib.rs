pub use blasnum_sys as sys;

/// Traits and implementations of BLAS providers
pub mod blas;

/// Comparison of computed results against reference results
pub mod check;

/// Bit exact conversions between `f32` and the 16 bit float encodings
pub mod codec;

/// Representation independent scalar operations
pub mod scalar;

pub use scalar::{compose, decompose, is_nan, negate, to_display_string, Scalar};
