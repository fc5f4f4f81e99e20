/// A half precision (binary16) float, held as its raw bit pattern.
///
/// Layout from the most significant bit: 1 sign bit, 5 exponent bits, 10 mantissa bits.
/// There is no arithmetic on this type. Reading or writing it as a full precision value
/// goes through an explicit codec.
///
/// Equality compares bit patterns, so a NaN equals itself and `+0` differs from `-0`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Half(u16);

impl Half {
    pub const SIGN_MASK: u16 = 0x8000;
    pub const EXPONENT_MASK: u16 = 0x7C00;
    pub const MANTISSA_MASK: u16 = 0x03FF;

    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3C00);
    pub const INFINITY: Self = Self(0x7C00);
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// The canonical quiet NaN
    pub const NAN: Self = Self(0x7E00);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }
}

impl From<u16> for Half {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Half> for u16 {
    fn from(h: Half) -> Self {
        h.0
    }
}
