//! # Ascon linear diffusion layer
//!
//! Each of the five state words is mixed with two rotated copies of itself:
//!
//! ```text
//! S[i] ^= rotr(S[i], A[i]) ^ rotr(S[i], B[i])
//! ```
//!
//! Words never influence each other, so the layer is five independent 64-bit transforms.
//!
//! # Usage
//!
//! ```
//! use ascon_diffusion::{State, diffuse};
//!
//! let out = diffuse([1, 0, 0, 0, 0]);
//! assert_eq!(out[0], 0x0000_2010_0000_0001);
//!
//! let state = State::from_words([1, 0, 0, 0, 0]);
//! assert_eq!(state.diffused().words(), &out);
//! ```

use crate::WORD_COUNT;

// Always compile portable for benchmarking comparison
mod portable;
#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse2;

/// First rotation amount for each word, `S0` first.
pub const ROTATIONS_A: [u32; WORD_COUNT] = [19, 61, 1, 10, 7];

/// Second rotation amount for each word, `S0` first.
pub const ROTATIONS_B: [u32; WORD_COUNT] = [28, 39, 6, 17, 41];

// Rotating a 64-bit word by 0 or 64 is degenerate.
const _: () = {
    let mut i = 0;
    while i < WORD_COUNT {
        assert!(ROTATIONS_A[i] > 0 && ROTATIONS_A[i] < 64);
        assert!(ROTATIONS_B[i] > 0 && ROTATIONS_B[i] < 64);
        i += 1;
    }
};

/// Apply the diffusion layer to five state words using SSE2 SIMD.
///
/// Words are given and returned in the same order, `S0` first. The input is not modified.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    // SAFETY: SSE2 is available on all x86_64 targets
    unsafe { sse2::diffuse(words) }
}

/// Apply the diffusion layer to five state words using NEON SIMD.
///
/// Words are given and returned in the same order, `S0` first. The input is not modified.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    // SAFETY: NEON is available on all aarch64 targets
    unsafe { neon::diffuse(words) }
}

/// Apply the diffusion layer to five state words using the portable implementation.
///
/// Words are given and returned in the same order, `S0` first. The input is not modified.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    portable::diffuse(words)
}

// Public benchmarking functions to compare implementations
#[doc(hidden)]
pub mod bench {
    use crate::WORD_COUNT;

    /// Apply the diffusion layer using the portable implementation (for benchmarking).
    pub fn diffuse_portable(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
        super::portable::diffuse(words)
    }

    /// Apply the diffusion layer using the SIMD implementation (for benchmarking).
    ///
    /// Uses SSE2 on x86_64 and NEON on aarch64. On other platforms this is an alias for
    /// portable.
    pub fn diffuse_simd(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
        super::diffuse(words)
    }
}

#[cfg(test)]
mod tests;
