#![no_std]
#![doc = include_str!("../README.md")]

mod diffusion;
mod render;
mod rotate;
mod state;

pub use diffusion::{ROTATIONS_A, ROTATIONS_B, bench, diffuse};
pub use render::{BitString, render_state, render_word};
pub use rotate::{InvalidRotation, rotr, rotr_wrapping};
pub use state::{InvalidWordIndex, State};

/// Number of 64-bit words in the Ascon state.
pub const WORD_COUNT: usize = 5;

/// Width of a single state word in bits.
pub const WORD_BITS: usize = 64;

/// Ascon state size in bits (320 bits = 5 u64 words).
pub const STATE_BITS: usize = WORD_COUNT * WORD_BITS;

/// Ascon state size in bytes when packed.
pub const STATE_SIZE: usize = STATE_BITS / 8;
