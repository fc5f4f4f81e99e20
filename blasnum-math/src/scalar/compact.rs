use blasnum_sys::{BFloat16, Half};

use super::Scalar;
use crate::codec::{bfloat16_to_float, float_to_bfloat16, float_to_half, half_to_float};

// All exponent bits set and a non zero mantissa.
#[inline]
fn is_nan_bits(bits: u16, exponent_mask: u16, mantissa_mask: u16) -> bool {
    (!bits & exponent_mask) == 0 && (bits & mantissa_mask) != 0
}

macro_rules! impl_scalar_compact {
    ($compact:ident => encode: $encode:path, decode: $decode:path,) => {
        impl Scalar for $compact {
            #[inline]
            fn is_nan(self) -> bool {
                is_nan_bits(self.to_bits(), $compact::EXPONENT_MASK, $compact::MANTISSA_MASK)
            }

            // narrowed to f32 first, then rounded once more by the codec
            #[allow(clippy::cast_possible_truncation)]
            #[inline]
            fn compose(real: f64, _imag: f64) -> Self {
                if real.is_nan() {
                    $compact::ZERO
                } else {
                    $compact::from_bits($encode(real as f32))
                }
            }

            #[inline]
            fn decompose(self) -> (f64, f64) {
                (f64::from($decode(self.to_bits())), 0.0)
            }

            // the packed form has no arithmetic, only the sign bit moves
            #[inline]
            fn negate(self) -> Self {
                $compact::from_bits(self.to_bits() ^ $compact::SIGN_MASK)
            }

            fn to_display_string(&self) -> String {
                $decode(self.to_bits()).to_string()
            }
        }
    };
}

impl_scalar_compact!(Half =>
    encode: float_to_half,
    decode: half_to_float,
);

impl_scalar_compact!(BFloat16 =>
    encode: float_to_bfloat16,
    decode: bfloat16_to_float,
);
