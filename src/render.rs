//! # Bit-string rendering
//!
//! Fixed-width `'0'`/`'1'` renderings of words and states for display. Most significant bit
//! first, always zero-padded to the full width, no allocation.
//!
//! ```
//! use ascon_diffusion::{State, render_state, render_word};
//!
//! assert_eq!(render_word(5).as_str().len(), 64);
//! assert!(render_word(5).as_str().ends_with("101"));
//!
//! let state = State::from_words([1, 0, 0, 0, 0]);
//! assert!(render_state(&state).as_str().ends_with("01"));
//! ```

use crate::{STATE_BITS, State, WORD_BITS};
use core::fmt;

/// A rendering of `N` bits as ASCII `'0'` and `'1'`, most significant bit first.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitString<const N: usize>([u8; N]);

impl<const N: usize> BitString<N> {
    /// The rendered bits.
    pub fn as_str(&self) -> &str {
        // Only b'0' and b'1' are ever written, so this never falls back.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The rendered bits as ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BitString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for BitString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Write `word` MSB first into `out`, which must be exactly one word wide.
fn write_word(out: &mut [u8], word: u64) {
    debug_assert_eq!(out.len(), WORD_BITS);

    for (i, digit) in out.iter_mut().enumerate() {
        *digit = if (word >> (WORD_BITS - 1 - i)) & 1 == 1 {
            b'1'
        } else {
            b'0'
        };
    }
}

/// Render a word as 64 binary digits, most significant bit first.
pub fn render_word(word: u64) -> BitString<WORD_BITS> {
    let mut out = [b'0'; WORD_BITS];
    write_word(&mut out, word);
    BitString(out)
}

/// Render the full 320-bit state, most significant bit first.
///
/// The packed value puts `S4` on top, so the rendering is `S4` followed by `S3` down to
/// `S0`.
pub fn render_state(state: &State) -> BitString<STATE_BITS> {
    let mut out = [b'0'; STATE_BITS];
    for (chunk, &word) in out.chunks_exact_mut(WORD_BITS).zip(state.words().iter().rev()) {
        write_word(chunk, word);
    }

    BitString(out)
}
