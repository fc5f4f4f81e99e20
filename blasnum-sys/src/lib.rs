/// IEEE-754 binary16 stored as its raw bit pattern
pub mod half;

/// bfloat16 stored as its raw bit pattern
pub mod bfloat16;

/// Types whose all-zero bit pattern is the value zero
pub mod zero;

pub use bfloat16::BFloat16;
pub use half::Half;
pub use num_complex::{Complex, Complex32, Complex64};
pub use zero::Zero;
