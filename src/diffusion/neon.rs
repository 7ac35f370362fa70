//! # Ascon diffusion layer - NEON SIMD implementation
//!
//! SIMD implementation of the diffusion layer using ARM NEON intrinsics.
//!
//! The five words map to two NEON vectors plus one scalar word:
//! - Vector 0: words[0..2]
//! - Vector 1: words[2..4]
//! - Scalar:   words[4]
//!
//! `vshlq_u64` takes a signed shift count per lane, negative counts shift right, so both
//! lanes rotate by their own amounts in one pass.

use super::{ROTATIONS_A, ROTATIONS_B};
use crate::WORD_COUNT;
use crate::rotate::rotr_unchecked;
use core::arch::aarch64::*;

/// Rotate lane 0 of `v` right by `lo` and lane 1 by `hi`.
///
/// # Safety
///
/// Requires NEON, and both amounts must be in `1..=63`.
#[target_feature(enable = "neon")]
#[inline]
unsafe fn rotr_pair(v: uint64x2_t, lo: u32, hi: u32) -> uint64x2_t {
    let right = [-(lo as i64), -(hi as i64)];
    let left = [64 - lo as i64, 64 - hi as i64];

    // SAFETY: NEON is enabled for this function and the loads read the two local arrays.
    unsafe {
        vorrq_u64(
            vshlq_u64(v, vld1q_s64(right.as_ptr())),
            vshlq_u64(v, vld1q_s64(left.as_ptr())),
        )
    }
}

/// Apply the diffusion layer using NEON SIMD.
///
/// # Safety
///
/// This function requires NEON support, which is available on all aarch64 targets.
/// The caller must ensure the code is running on a compatible CPU.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    let mut out = [0u64; WORD_COUNT];

    // SAFETY: All NEON intrinsics are safe to use within this function as we have
    // the target_feature(enable = "neon") attribute and the caller guarantees NEON support.
    // Loads and stores stay within words[0..4] and out[0..4].
    unsafe {
        for lane in [0, 2] {
            let v = vld1q_u64(words.as_ptr().add(lane));

            let a = rotr_pair(v, ROTATIONS_A[lane], ROTATIONS_A[lane + 1]);
            let b = rotr_pair(v, ROTATIONS_B[lane], ROTATIONS_B[lane + 1]);

            vst1q_u64(out.as_mut_ptr().add(lane), veorq_u64(v, veorq_u64(a, b)));
        }
    }

    // The last word has no partner lane.
    let s4 = words[4];
    out[4] = s4 ^ rotr_unchecked(s4, ROTATIONS_A[4]) ^ rotr_unchecked(s4, ROTATIONS_B[4]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse_neon_single_bit() {
        let out = unsafe { diffuse([1, 0, 0, 0, 0]) };

        assert_eq!(out, [0x0000_2010_0000_0001, 0, 0, 0, 0]);
    }

    #[test]
    fn test_diffuse_neon_matches_portable() {
        // Ensure NEON version matches the portable version
        use super::super::portable;

        let words = [
            0x1234_5678_9abc_def0,
            0x1111_1111_2222_2222,
            0x3333_3333_4444_4444,
            0x5555_5555_6666_6666,
            0x7777_7777_8888_8888,
        ];

        let out_neon = unsafe { diffuse(words) };
        let out_portable = portable::diffuse(words);

        assert_eq!(out_neon, out_portable);
    }
}
