//! Throughput of the sparse engine on random soups of increasing size.
//!
//! Use with `--release` for meaningful numbers.

use rand::RngCore;
use rand::SeedableRng;
use sparse_life::{Engine, Generation};
use std::time::Instant;

const DENSITY: f64 = 0.35;

fn random_soup(size: i64, density: f64, seed: u64) -> Generation {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    let mut cells = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if rng.next_u64() <= threshold {
                cells.push((x, y));
            }
        }
    }
    Generation::from_cells(cells)
}

fn bench(size: i64, iterations: u64) -> (f64, usize, usize) {
    let seed = random_soup(size, DENSITY, 0x5EED_1234_ABCD_EF01);
    let initial = seed.population();
    let mut engine = Engine::new();

    let start = Instant::now();
    let last = engine.step_n(&seed, iterations);
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, initial, last.population())
}

fn main() {
    let scales: &[(i64, u64)] = &[(32, 200), (64, 200), (128, 100), (256, 50), (512, 20)];

    println!(
        "{:<10} {:>10} {:>8} {:>12} {:>10} {:>10}",
        "Soup", "Seed pop", "Iters", "Total(ms)", "Avg(ms)", "Final pop"
    );
    println!("{}", "-".repeat(66));

    for &(size, iters) in scales {
        let (total_ms, initial, last) = bench(size, iters);
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<10} {:>10} {:>8} {:>12.1} {:>10.4} {:>10}",
            format!("{}x{}", size, size),
            initial,
            iters,
            total_ms,
            avg_ms,
            last
        );
    }
}
