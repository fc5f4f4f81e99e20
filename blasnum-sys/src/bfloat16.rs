/// A bfloat16 float, held as its raw bit pattern.
///
/// Layout from the most significant bit: 1 sign bit, 8 exponent bits, 7 mantissa bits,
/// i.e. the upper half of an `f32`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BFloat16(u16);

impl BFloat16 {
    pub const SIGN_MASK: u16 = 0x8000;
    pub const EXPONENT_MASK: u16 = 0x7F80;
    pub const MANTISSA_MASK: u16 = 0x007F;

    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3F80);
    pub const INFINITY: Self = Self(0x7F80);
    pub const NEG_INFINITY: Self = Self(0xFF80);
    pub const NAN: Self = Self(0x7FC0);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }
}

impl From<u16> for BFloat16 {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<BFloat16> for u16 {
    fn from(b: BFloat16) -> Self {
        b.0
    }
}
