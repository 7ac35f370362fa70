//! Portable scalar implementation of the Ascon diffusion layer.

use super::{ROTATIONS_A, ROTATIONS_B};
use crate::WORD_COUNT;
use crate::rotate::rotr_unchecked;

/// Portable implementation of the diffusion layer.
pub(crate) fn diffuse(words: [u64; WORD_COUNT]) -> [u64; WORD_COUNT] {
    let mut out = [0u64; WORD_COUNT];

    for (i, (slot, &word)) in out.iter_mut().zip(words.iter()).enumerate() {
        *slot = word ^ rotr_unchecked(word, ROTATIONS_A[i]) ^ rotr_unchecked(word, ROTATIONS_B[i]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse_single_bit() {
        let out = diffuse([1, 0, 0, 0, 0]);

        assert_eq!(out, [0x0000_2010_0000_0001, 0, 0, 0, 0]);
    }

    #[test]
    fn test_diffuse_matches_rotate_right() {
        let words = [
            0x0123_4567_89ab_cdef,
            0xfedc_ba98_7654_3210,
            0xdead_beef_cafe_babe,
            0x1111_2222_3333_4444,
            0x8000_0000_0000_0001,
        ];

        let out = diffuse(words);

        assert_eq!(out[0], words[0] ^ words[0].rotate_right(19) ^ words[0].rotate_right(28));
        assert_eq!(out[1], words[1] ^ words[1].rotate_right(61) ^ words[1].rotate_right(39));
        assert_eq!(out[2], words[2] ^ words[2].rotate_right(1) ^ words[2].rotate_right(6));
        assert_eq!(out[3], words[3] ^ words[3].rotate_right(10) ^ words[3].rotate_right(17));
        assert_eq!(out[4], words[4] ^ words[4].rotate_right(7) ^ words[4].rotate_right(41));
    }
}
