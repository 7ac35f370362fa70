//! # 64-bit rotation
//!
//! Circular right rotation of a state word. Bits leaving the low end re-enter at the
//! high end.

use core::fmt;

/// Rotation width, in bits, of a state word.
const WIDTH: u32 = 64;

/// The rotation amount was outside `1..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation {
    /// The rejected amount.
    pub amount: u32,
}

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotation amount {} is outside 1..={}",
            self.amount,
            WIDTH - 1
        )
    }
}

impl core::error::Error for InvalidRotation {}

/// Rotate `x` right by `n` bits.
///
/// Only amounts in `1..=63` are accepted, `0` and anything from `64` upwards return
/// [`InvalidRotation`]. Use [`rotr_wrapping`] for arbitrary amounts.
///
/// # Example
///
/// ```
/// use ascon_diffusion::rotr;
///
/// assert_eq!(rotr(1, 19), Ok(0x0000_2000_0000_0000));
/// assert!(rotr(1, 64).is_err());
/// ```
pub const fn rotr(x: u64, n: u32) -> Result<u64, InvalidRotation> {
    if n == 0 || n >= WIDTH {
        return Err(InvalidRotation { amount: n });
    }

    Ok(rotr_unchecked(x, n))
}

/// Rotate `x` right by `n mod 64` bits.
///
/// Multiples of 64 leave `x` unchanged, so `n` and `n + 64 * k` always agree.
pub const fn rotr_wrapping(x: u64, n: u32) -> u64 {
    match n % WIDTH {
        0 => x,
        r => rotr_unchecked(x, r),
    }
}

/// Rotate `x` right by `n` bits, `n` must be in `1..=63`.
#[inline(always)]
pub(crate) const fn rotr_unchecked(x: u64, n: u32) -> u64 {
    debug_assert!(n > 0 && n < WIDTH);
    (x >> n) | (x << (WIDTH - n))
}
