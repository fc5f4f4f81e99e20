use blasnum_sys::Complex;

use super::Scalar;

macro_rules! impl_scalar_complex {
    ($($float:ident),*) => {
        $(
            impl Scalar for Complex<$float> {
                const IS_COMPLEX: bool = true;

                #[inline]
                fn is_nan(self) -> bool {
                    self.re.is_nan() || self.im.is_nan()
                }

                #[inline]
                fn compose(real: f64, imag: f64) -> Self {
                    if real.is_nan() || imag.is_nan() {
                        Complex::new(0.0, 0.0)
                    } else {
                        Complex::new(real as $float, imag as $float)
                    }
                }

                #[inline]
                fn decompose(self) -> (f64, f64) {
                    (f64::from(self.re), f64::from(self.im))
                }

                #[inline]
                fn negate(self) -> Self {
                    -self
                }

                // a negative imaginary part brings its own minus sign
                fn to_display_string(&self) -> String {
                    if self.im >= 0.0 {
                        format!("{}+{}i", self.re, self.im)
                    } else {
                        format!("{}{}i", self.re, self.im)
                    }
                }
            }
        )*
    };
}

impl_scalar_complex!(f32, f64);

#[cfg(test)]
mod tests {
    use blasnum_sys::{Complex32, Complex64};

    use crate::scalar::{compose, decompose, is_nan, negate, to_display_string, Scalar};

    #[test]
    fn display() {
        assert_eq!(to_display_string(&Complex64::new(1.5, 2.3)), "1.5+2.3i");
        assert_eq!(to_display_string(&Complex64::new(1.5, -2.3)), "1.5-2.3i");
        assert_eq!(to_display_string(&Complex64::new(1.5, 0.0)), "1.5+0i");
        assert_eq!(to_display_string(&Complex32::new(-1.0, 0.25)), "-1+0.25i");
        // -0.0 compares equal to zero, so it takes the '+' branch
        assert_eq!(to_display_string(&Complex64::new(1.0, -0.0)), "1+-0i");
    }

    #[test]
    fn compose_complex() {
        assert_eq!(compose::<Complex64>(2.0, -3.0), Complex64::new(2.0, -3.0));
        assert_eq!(compose::<Complex32>(0.1, 0.2), Complex32::new(0.1, 0.2));
        assert_eq!(compose::<Complex64>(f64::NAN, 1.0), Complex64::new(0.0, 0.0));
        assert_eq!(compose::<Complex32>(1.0, f64::NAN), Complex32::new(0.0, 0.0));
        assert_eq!(decompose(compose::<Complex32>(0.5, -8.0)), (0.5, -8.0));
    }

    #[test]
    fn nan_in_either_component() {
        assert!(is_nan(Complex64::new(f64::NAN, 0.0)));
        assert!(is_nan(Complex32::new(0.0, f32::NAN)));
        assert!(!is_nan(Complex64::new(f64::INFINITY, 1.0)));
    }

    #[test]
    fn negate_twice_is_identity() {
        let v = Complex64::new(2.0, -3.0);
        assert_eq!(negate(v), Complex64::new(-2.0, 3.0));
        assert_eq!(negate(negate(v)), v);
    }

    #[test]
    fn complex_flag() {
        assert!(Complex32::IS_COMPLEX);
        assert!(Complex64::IS_COMPLEX);
    }
}
