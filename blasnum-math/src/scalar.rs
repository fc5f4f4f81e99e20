use blasnum_sys::Zero;

mod compact;
mod complex;

/// A value type that reference and comparison code can handle without knowing
/// its representation.
///
/// Every supported representation implements this once, and generic code goes
/// through it (or the free functions below) rather than special casing types.
pub trait Scalar: Zero + Send + Sync + 'static {
    /// `true` for representations with a real and an imaginary component
    const IS_COMPLEX: bool = false;

    /// Whether the value encodes not-a-number.
    /// Representations without a NaN encoding always return `false`.
    fn is_nan(self) -> bool;

    /// Build a value from double precision components.
    ///
    /// NaN inputs produce zero rather than propagating into reference results.
    /// Non complex representations ignore `imag`.
    fn compose(real: f64, imag: f64) -> Self;

    /// Widen to double precision `(real, imag)` components.
    fn decompose(self) -> (f64, f64);

    /// Flip the sign. Applying it twice gives back the same bits.
    fn negate(self) -> Self;

    /// Human readable rendering, used when reporting mismatches
    fn to_display_string(&self) -> String;
}

/// Returns true if value is NaN
#[inline]
pub fn is_nan<T: Scalar>(value: T) -> bool {
    value.is_nan()
}

/// Convert two double arguments into a `T`, see [`Scalar::compose`]
#[inline]
pub fn compose<T: Scalar>(real: f64, imag: f64) -> T {
    T::compose(real, imag)
}

#[inline]
pub fn decompose<T: Scalar>(value: T) -> (f64, f64) {
    value.decompose()
}

#[inline]
pub fn negate<T: Scalar>(value: T) -> T {
    value.negate()
}

#[inline]
pub fn to_display_string<T: Scalar>(value: &T) -> String {
    value.to_display_string()
}

macro_rules! impl_scalar_float {
    ($($float:ident),*) => {
        $(
            impl Scalar for $float {
                #[inline]
                fn is_nan(self) -> bool {
                    $float::is_nan(self)
                }

                #[inline]
                fn compose(real: f64, _imag: f64) -> Self {
                    if real.is_nan() {
                        0.0
                    } else {
                        real as $float
                    }
                }

                #[inline]
                fn decompose(self) -> (f64, f64) {
                    (f64::from(self), 0.0)
                }

                #[inline]
                fn negate(self) -> Self {
                    -self
                }

                fn to_display_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// `as` saturates out of range values, and NaN has already been mapped to zero
macro_rules! impl_scalar_int {
    ($($int:ident),*) => {
        $(
            impl Scalar for $int {
                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                #[inline]
                fn compose(real: f64, _imag: f64) -> Self {
                    if real.is_nan() {
                        0
                    } else {
                        real as $int
                    }
                }

                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn decompose(self) -> (f64, f64) {
                    (self as f64, 0.0)
                }

                #[inline]
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }

                fn to_display_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);
