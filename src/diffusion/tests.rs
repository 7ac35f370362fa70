use super::*;
use crate::State;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_words(rng: &mut StdRng) -> [u64; WORD_COUNT] {
    core::array::from_fn(|_| rng.r#gen())
}

#[test]
fn test_single_bit_vector() {
    // rotr(1, 19) = 1 << 45, rotr(1, 28) = 1 << 36.
    let out = diffuse([1, 0, 0, 0, 0]);

    assert_eq!(out[0], 1 ^ 0x0000_2000_0000_0000 ^ 0x0000_0010_0000_0000);
    assert_eq!(out[0], 0x0000_2010_0000_0001);
    assert_eq!(out[0], (1 << 45) | (1 << 36) | 1);
    assert_eq!(&out[1..], &[0, 0, 0, 0]);
}

#[test]
fn test_single_bit_in_every_word() {
    let out = diffuse([1; WORD_COUNT]);

    for i in 0..WORD_COUNT {
        let expected = 1 | (1u64 << (64 - ROTATIONS_A[i])) | (1u64 << (64 - ROTATIONS_B[i]));
        assert_eq!(out[i], expected, "word {i}");
    }
}

#[test]
fn test_fixed_points() {
    assert_eq!(diffuse([0; WORD_COUNT]), [0; WORD_COUNT]);

    // x ^ x ^ x = x for the all-ones word.
    assert_eq!(diffuse([u64::MAX; WORD_COUNT]), [u64::MAX; WORD_COUNT]);
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..1000 {
        let words = random_words(&mut rng);
        assert_eq!(diffuse(words), diffuse(words));
    }
}

#[test]
fn test_words_are_independent() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let words = random_words(&mut rng);
        let base = diffuse(words);

        for j in 0..WORD_COUNT {
            let mut changed = words;
            changed[j] ^= 1u64 << rng.gen_range(0..64u32);

            let out = diffuse(changed);
            for k in 0..WORD_COUNT {
                if k == j {
                    assert_ne!(out[k], base[k], "word {j} change must reach output {j}");
                } else {
                    assert_eq!(out[k], base[k], "word {j} change leaked into output {k}");
                }
            }
        }
    }
}

#[test]
fn test_simd_matches_portable() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..1000 {
        let words = random_words(&mut rng);
        assert_eq!(bench::diffuse_simd(words), bench::diffuse_portable(words));
    }
}

#[test]
fn test_state_diffused_matches_words() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..100 {
        let words = random_words(&mut rng);
        let state = State::from_words(words);

        let diffused = state.diffused();

        assert_eq!(diffused.words(), &diffuse(words));
        assert_eq!(state.words(), &words);
    }
}

#[test]
fn test_matches_checked_rotation() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let words = random_words(&mut rng);
        let out = diffuse(words);

        for i in 0..WORD_COUNT {
            let a = crate::rotr(words[i], ROTATIONS_A[i]).unwrap();
            let b = crate::rotr(words[i], ROTATIONS_B[i]).unwrap();
            assert_eq!(out[i], words[i] ^ a ^ b);
        }
    }
}
