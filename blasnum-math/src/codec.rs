//! Conversions between `f32` and the 16 bit encodings.
//!
//! The half precision codec goes through the `half` crate by default. Without the
//! `half` feature a portable encoder reproduces the F16C `vcvtps2ph` instruction
//! with round-to-nearest-even, so reference values built on any host match.

/// Convert an `f32` to the nearest half precision bit pattern, ties to even.
#[inline]
pub fn float_to_half(value: f32) -> u16 {
    #[cfg(feature = "half")]
    {
        half::f16::from_f32(value).to_bits()
    }

    #[cfg(not(feature = "half"))]
    {
        f32_to_f16_soft(value)
    }
}

/// Expand a half precision bit pattern to `f32`. This never loses information.
#[inline]
pub fn half_to_float(bits: u16) -> f32 {
    #[cfg(feature = "half")]
    {
        half::f16::from_bits(bits).to_f32()
    }

    #[cfg(not(feature = "half"))]
    {
        f16_to_f32_soft(bits)
    }
}

/// Convert an `f32` to the nearest bfloat16 bit pattern, ties to even.
#[inline]
pub fn float_to_bfloat16(value: f32) -> u16 {
    let x = value.to_bits();

    // quiet the NaN, keeping sign and the upper payload
    if x & 0x7FFF_FFFF > 0x7F80_0000 {
        return ((x >> 16) | 0x0040) as u16;
    }

    let round_bit = 0x0000_8000;
    if (x & round_bit) != 0 && (x & (3 * round_bit - 1)) != 0 {
        ((x >> 16) + 1) as u16
    } else {
        (x >> 16) as u16
    }
}

/// Expand a bfloat16 bit pattern to `f32`. Finite values and infinities are exact,
/// a NaN comes back quiet.
#[inline]
pub fn bfloat16_to_float(bits: u16) -> f32 {
    if bits & 0x7FFF > 0x7F80 {
        return f32::from_bits(u32::from(bits | 0x0040) << 16);
    }
    f32::from_bits(u32::from(bits) << 16)
}

// `round_bit` marks the highest dropped bit. `3 * round_bit - 1` covers every
// lower dropped bit plus the lowest kept bit, so a tie only rounds up when the
// kept value is odd.
#[cfg_attr(feature = "half", allow(dead_code))]
fn f32_to_f16_soft(value: f32) -> u16 {
    let x = value.to_bits();

    let sign = x & 0x8000_0000;
    let exp = x & 0x7F80_0000;
    let man = x & 0x007F_FFFF;

    let half_sign = sign >> 16;

    // infinity or NaN
    if exp == 0x7F80_0000 {
        let nan_bit = if man == 0 { 0 } else { 0x0200 };
        return (half_sign | 0x7C00 | nan_bit | (man >> 13)) as u16;
    }

    let unbiased_exp = ((exp >> 23) as i32) - 127;
    let half_exp = unbiased_exp + 15;

    // overflow
    if half_exp >= 0x1F {
        return (half_sign | 0x7C00) as u16;
    }

    // subnormal or zero
    if half_exp <= 0 {
        // below half of the smallest subnormal
        if 14 - half_exp > 24 {
            return half_sign as u16;
        }

        let man = man | 0x0080_0000;
        let shift = (14 - half_exp) as u32;
        let mut half_man = man >> shift;

        let round_bit = 1 << (shift - 1);
        if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
            half_man += 1;
        }

        // a carry out of the mantissa lands on the smallest normal, which is correct
        return (half_sign | half_man) as u16;
    }

    let half_exp = (half_exp as u32) << 10;
    let half_man = man >> 13;

    let round_bit = 0x0000_1000;
    if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
        // a carry may overflow into the exponent, up to infinity
        ((half_sign | half_exp | half_man) + 1) as u16
    } else {
        (half_sign | half_exp | half_man) as u16
    }
}

#[cfg_attr(feature = "half", allow(dead_code))]
fn f16_to_f32_soft(bits: u16) -> f32 {
    let sign = u32::from(bits & 0x8000) << 16;
    let exp = bits & 0x7C00;
    let man = u32::from(bits & 0x03FF);

    if bits & 0x7FFF == 0 {
        return f32::from_bits(sign);
    }

    if exp == 0x7C00 {
        return if man == 0 {
            f32::from_bits(sign | 0x7F80_0000)
        } else {
            f32::from_bits(sign | 0x7FC0_0000 | (man << 13))
        };
    }

    if exp == 0 {
        // normalise the subnormal
        let e = (man as u16).leading_zeros() - 6;
        let exp = (127 - 15 - e) << 23;
        let man = (man << (14 + e)) & 0x007F_FFFF;
        return f32::from_bits(sign | exp | man);
    }

    let exp = (u32::from(exp >> 10) + (127 - 15)) << 23;
    f32::from_bits(sign | exp | (man << 13))
}
