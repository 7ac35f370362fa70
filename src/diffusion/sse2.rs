//! # Ascon diffusion layer - SSE2 SIMD implementation
//!
//! SIMD implementation of the diffusion layer using x86-64 SSE2 intrinsics.
//!
//! The five words map to two SSE2 vectors plus one scalar word:
//! - Vector 0: words[0..2]
//! - Vector 1: words[2..4]
//! - Scalar:   words[4]
//!
//! SSE2 shifts both 64-bit lanes by the same count, so each rotation is computed once per
//! lane amount and the lanes are recombined.

use super::{ROTATIONS_A, ROTATIONS_B};
use crate::WORD_COUNT;
use crate::rotate::rotr_unchecked;
use core::arch::x86_64::*;

/// Rotate lane 0 of `v` right by `lo` and lane 1 by `hi`.
///
/// # Safety
///
/// Requires SSE2, and both amounts must be in `1..=63`.
#[target_feature(enable = "sse2")]
#[inline]
unsafe fn rotr_pair(v: __m128i, lo: u32, hi: u32) -> __m128i {
    // SAFETY: SSE2 is enabled for this function and the intrinsics only touch registers.
    unsafe {
        let lo_rot = _mm_or_si128(
            _mm_srl_epi64(v, _mm_cvtsi32_si128(lo as i32)),
            _mm_sll_epi64(v, _mm_cvtsi32_si128((64 - lo) as i32)),
        );
        let hi_rot = _mm_or_si128(
            _mm_srl_epi64(v, _mm_cvtsi32_si128(hi as i32)),
            _mm_sll_epi64(v, _mm_cvtsi32_si128((64 - hi) as i32)),
        );

        // Low lane from lo_rot, high lane from hi_rot.
        _mm_castpd_si128(_mm_move_sd(
            _mm_castsi128_pd(hi_rot),
            _mm_castsi128_pd(lo_rot),
        ))
    }
}

/// Apply the diffusion layer using SSE2 SIMD.
///
/// # Safety
///
/// This function requires SSE2 support, which is available on all x86-64 targets.
/// The caller must ensure the code is running on a compatible CPU.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    let mut out = [0u64; WORD_COUNT];

    // SAFETY: All SSE2 intrinsics are safe to use within this function as we have
    // the target_feature(enable = "sse2") attribute and the caller guarantees SSE2 support.
    // Loads and stores stay within words[0..4] and out[0..4].
    unsafe {
        for lane in [0, 2] {
            let v = _mm_loadu_si128(words.as_ptr().add(lane) as *const __m128i);

            let a = rotr_pair(v, ROTATIONS_A[lane], ROTATIONS_A[lane + 1]);
            let b = rotr_pair(v, ROTATIONS_B[lane], ROTATIONS_B[lane + 1]);

            _mm_storeu_si128(
                out.as_mut_ptr().add(lane) as *mut __m128i,
                _mm_xor_si128(v, _mm_xor_si128(a, b)),
            );
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
    fn test_diffuse_sse2_single_bit() {
        let out = unsafe { diffuse([1, 0, 0, 0, 0]) };

        assert_eq!(out, [0x0000_2010_0000_0001, 0, 0, 0, 0]);
    }

    #[test]
    fn test_diffuse_sse2_matches_portable() {
        // Ensure SSE2 version matches the portable version
        use super::super::portable;

        let words = [
            0x1234_5678_9abc_def0,
            0x1111_1111_2222_2222,
            0x3333_3333_4444_4444,
            0x5555_5555_6666_6666,
            0x7777_7777_8888_8888,
        ];

        let out_sse2 = unsafe { diffuse(words) };
        let out_portable = portable::diffuse(words);

        assert_eq!(out_sse2, out_portable);
    }
}
