//! # Ascon state
//!
//! The 320-bit state as five 64-bit words. Word `S0` holds the least-significant 64 bits
//! of the packed value and `S4` the most-significant.

use crate::{STATE_SIZE, WORD_COUNT};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The word index was outside `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWordIndex {
    /// The rejected index.
    pub index: usize,
}

impl fmt::Display for InvalidWordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word index {} is outside 0..{}",
            self.index, WORD_COUNT
        )
    }
}

impl core::error::Error for InvalidWordIndex {}

/// Ascon state: 5 u64 words (320 bits).
///
/// Equality is checked in constant time and the words are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct State(pub(crate) [u64; WORD_COUNT]);

impl State {
    /// Create an all-zero state.
    #[inline(always)]
    pub const fn new() -> Self {
        Self([0; WORD_COUNT])
    }

    /// Create a state from its words, `S0` first.
    #[inline(always)]
    pub const fn from_words(words: [u64; WORD_COUNT]) -> Self {
        Self(words)
    }

    /// Create a state from its packed little-endian representation.
    ///
    /// Bytes `8 * i..8 * i + 8` become word `i`, so bit `k` of the packed value is bit
    /// `k % 64` of word `k / 64`.
    pub fn from_le_bytes(bytes: &[u8; STATE_SIZE]) -> Self {
        let mut words = [0u64; WORD_COUNT];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }

        Self(words)
    }

    /// Packed little-endian representation, the inverse of [`State::from_le_bytes`].
    pub fn to_le_bytes(&self) -> [u8; STATE_SIZE] {
        let mut bytes = [0u8; STATE_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        bytes
    }

    /// All five words, `S0` first.
    #[inline(always)]
    pub const fn words(&self) -> &[u64; WORD_COUNT] {
        &self.0
    }

    /// Word `S{index}`, i.e. bits `64 * index..64 * index + 64` of the packed value.
    ///
    /// # Example
    ///
    /// ```
    /// use ascon_diffusion::{InvalidWordIndex, State};
    ///
    /// let state = State::from_words([0, 1, 2, 3, 4]);
    /// assert_eq!(state.word(3), Ok(3));
    /// assert_eq!(state.word(5), Err(InvalidWordIndex { index: 5 }));
    /// ```
    pub const fn word(&self, index: usize) -> Result<u64, InvalidWordIndex> {
        if index >= WORD_COUNT {
            return Err(InvalidWordIndex { index });
        }

        Ok(self.0[index])
    }

    /// Apply the diffusion layer, returning the diffused state.
    ///
    /// `self` is left untouched.
    pub fn diffused(&self) -> Self {
        Self(crate::diffuse(self.0))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u64; WORD_COUNT]> for State {
    fn from(words: [u64; WORD_COUNT]) -> Self {
        Self::from_words(words)
    }
}

impl ConstantTimeEq for State {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("State");
        for word in &self.0 {
            tuple.field(&format_args!("{word:#018x}"));
        }
        tuple.finish()
    }
}
