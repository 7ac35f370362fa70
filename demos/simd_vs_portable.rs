//! Benchmark comparing SIMD vs portable diffusion layer implementations.
//!
//! This example diffuses a batch of random states repeatedly using both the SIMD and the
//! portable implementations, measuring the performance difference.
//!
//! **Performance characteristics by platform:**
//! - **x86_64**: SSE2, two words per vector
//! - **aarch64**: NEON, two words per vector
//! - **Other platforms**: Both use portable
//!
//! Run with: cargo run --release --example simd_vs_portable

use ascon_diffusion::{WORD_COUNT, bench};
use std::hint::black_box;
use std::time::Instant;

const STATES: usize = 1024;
const PASSES: usize = 10_000;

/// Diffuse every state in place `PASSES` times with `diffuse_fn`.
fn run<F>(states: &mut [[u64; WORD_COUNT]], diffuse_fn: F)
where
    F: Fn([u64; WORD_COUNT]) -> [u64; WORD_COUNT],
{
    for _ in 0..PASSES {
        for state in states.iter_mut() {
            *state = diffuse_fn(black_box(*state));
        }
    }
}

fn main() {
    println!("Ascon diffusion SIMD vs Portable Benchmark");
    println!("==========================================");

    #[cfg(target_arch = "x86_64")]
    println!("Platform: x86_64 - Comparing SSE2 vs portable\n");

    #[cfg(target_arch = "aarch64")]
    println!("Platform: aarch64 - Comparing NEON vs portable\n");

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    println!("Platform: {} - Both use portable\n", std::env::consts::ARCH);

    println!("Generating {STATES} random states...");
    let mut states_simd: Vec<[u64; WORD_COUNT]> = (0..STATES)
        .map(|_| std::array::from_fn(|_| rand::random()))
        .collect();
    let mut states_portable = states_simd.clone();

    let total = (STATES * PASSES) as f64;

    println!("Running SIMD version...");
    let start_simd = Instant::now();
    run(&mut states_simd, bench::diffuse_simd);
    let duration_simd = start_simd.elapsed();
    let rate_simd = total / duration_simd.as_secs_f64() / 1e6;
    println!("SIMD completed in: {:.2?} ({:.2} M states/s)\n", duration_simd, rate_simd);

    println!("Running portable version...");
    let start_portable = Instant::now();
    run(&mut states_portable, bench::diffuse_portable);
    let duration_portable = start_portable.elapsed();
    let rate_portable = total / duration_portable.as_secs_f64() / 1e6;
    println!(
        "Portable completed in: {:.2?} ({:.2} M states/s)\n",
        duration_portable, rate_portable
    );

    let speedup = duration_portable.as_secs_f64() / duration_simd.as_secs_f64();
    println!("==========================================");
    println!("Speedup:  {:.2}x", speedup);

    if states_simd == states_portable {
        println!("\n✓ Both implementations produce identical results");
    } else {
        println!("\n✗ WARNING: Implementations produce different results!");
    }
}
