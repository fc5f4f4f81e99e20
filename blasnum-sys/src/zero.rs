use num_complex::Complex;

use crate::{BFloat16, Half};

/// This trait signifies that `[0; size_of::<T>]` is transmutable
/// to a valid `T` safely, and that `T` fits some concept of 'zero'.
///
/// # Safety
/// The set of zero bytes the size of Self should be a valid value
pub unsafe trait Zero: Copy {
    /// The all-zero value of this representation
    fn zeroed() -> Self {
        // SAFETY: guaranteed by the implementor
        unsafe { std::mem::zeroed() }
    }
}

unsafe impl Zero for f32 {}
unsafe impl Zero for f64 {}

// +0.0 in both compact layouts
unsafe impl Zero for Half {}
unsafe impl Zero for BFloat16 {}

// `Complex<T>` is `#[repr(C)]` with two `T` fields
unsafe impl<T: Zero> Zero for Complex<T> {}

macro_rules! impl_zero_int {
    ($($int:ty),*) => {
        $(unsafe impl Zero for $int {})*
    };
}

impl_zero_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::Zero;
    use crate::{BFloat16, Half};

    #[test]
    fn zeroed_is_positive_zero() {
        assert_eq!(f32::zeroed().to_bits(), 0);
        assert_eq!(f64::zeroed().to_bits(), 0);
        assert_eq!(Half::zeroed(), Half::ZERO);
        assert_eq!(BFloat16::zeroed(), BFloat16::ZERO);
        assert_eq!(Complex64::zeroed(), Complex64::new(0.0, 0.0));
        assert_eq!(i32::zeroed(), 0);
    }
}
