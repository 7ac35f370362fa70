//! Diffuse a random Ascon state and print it bit by bit.
//!
//! Run with: cargo run --example diffuse

use ascon_diffusion::{STATE_SIZE, State, render_state, render_word};
use rand::RngCore;
use std::io::{self, Write};

/// Draw a random state from `rng`, diffuse it and write the report to `out`.
fn report<R: RngCore, W: Write>(rng: &mut R, out: &mut W) -> io::Result<()> {
    let mut bytes = [0u8; STATE_SIZE];
    rng.fill_bytes(&mut bytes);

    let state = State::from_le_bytes(&bytes);
    let diffused = state.diffused();

    writeln!(out, "=== ASCON Diffusion Layer ===\n")?;
    writeln!(out, "Original state (320 bits):")?;
    writeln!(out, "{}", render_state(&state))?;

    writeln!(out, "each word start from s0:")?;
    for &word in state.words() {
        writeln!(out, "{}", render_word(word))?;
    }

    writeln!(out, "\n=== After diffusion ===")?;
    writeln!(out, "{}", render_state(&diffused))?;

    writeln!(out, "each diffused word start from s0:")?;
    for &word in diffused.words() {
        writeln!(out, "{}", render_word(word))?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    report(&mut rand::thread_rng(), &mut stdout.lock())
}
