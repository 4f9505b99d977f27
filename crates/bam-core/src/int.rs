use std::fmt;

use crate::error::{KernelError, Result};
use crate::width;

/// A signed integer restricted to `W` bits of two's-complement range.
///
/// The value is held in an `i64`, so `W` must lie in `1..=64`. Checked
/// construction rejects values outside the range; [`SInt::wrapping`]
/// truncates to the low `W` bits and sign-extends, the way a `W`-bit
/// hardware register would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SInt<const W: u32>(i64);

impl<const W: u32> SInt<W> {
    /// Number of bits carried by this type.
    pub const WIDTH: u32 = W;
    /// Smallest representable value, `-2^(W-1)`.
    pub const MIN: i64 = width::signed_min(W);
    /// Largest representable value, `2^(W-1) - 1`.
    pub const MAX: i64 = width::signed_max(W);
    pub const ZERO: Self = SInt(0);

    /// Create a value, failing if it does not fit in `W` bits.
    pub fn new(value: i64) -> Result<Self> {
        const { assert!(W >= 1 && W <= 64, "SInt width must be in 1..=64") };
        if value < Self::MIN || value > Self::MAX {
            return Err(KernelError::OutOfWidth { value, width: W });
        }
        Ok(SInt(value))
    }

    /// Keep the low `W` bits of `value`, sign-extending from bit `W - 1`.
    pub fn wrapping(value: i64) -> Self {
        const { assert!(W >= 1 && W <= 64, "SInt width must be in 1..=64") };
        let shift = 64 - W;
        SInt((value << shift) >> shift)
    }

    /// The value as a native integer.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Full-precision product, stored into an `R`-bit result.
    ///
    /// The product of two `W`-bit values needs at most `2W` bits; `R` may be
    /// narrower when the operands are known to be smaller than their type
    /// allows, in which case the product wraps if that knowledge is wrong.
    pub fn mul_into<const R: u32>(self, rhs: SInt<W>) -> SInt<R> {
        const { assert!(W <= 32, "operand width must be at most 32 bits") };
        SInt::<R>::wrapping(self.0 * rhs.0)
    }

    /// Sum wrapped to `W` bits.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::wrapping(self.0.wrapping_add(rhs.0))
    }
}

impl<const W: u32> From<SInt<W>> for i64 {
    fn from(v: SInt<W>) -> i64 {
        v.0
    }
}

impl<const W: u32> TryFrom<i64> for SInt<W> {
    type Error = KernelError;

    fn try_from(value: i64) -> Result<Self> {
        SInt::new(value)
    }
}

impl<const W: u32> fmt::Display for SInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
