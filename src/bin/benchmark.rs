//! Step timing on patterns that keep growing

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::LiveSet;
use sparse_life::domain::{DEFAULT_DENSITY, acorn, generations, gosper_glider_gun, r_pentomino};

/// Average ms per generation over `steps` generations, and the final population
fn benchmark(seed: &LiveSet, steps: u32) -> (f64, usize) {
    let start = Instant::now();
    let population = generations(seed.clone())
        .nth(steps as usize)
        .map_or(0, |live| live.len());
    let per_gen = start.elapsed().as_secs_f64() * 1000.0 / steps as f64;
    (per_gen, population)
}

fn main() {
    println!("=== Sparse Life Step Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(1);
    let cases: Vec<(&str, LiveSet)> = vec![
        ("R-pentomino", r_pentomino(0, 0)),
        ("Acorn", acorn(0, 0)),
        ("Glider gun", gosper_glider_gun(0, 0)),
        ("Soup 100x100", LiveSet::random(100, 100, DEFAULT_DENSITY, &mut rng)),
        ("Soup 500x500", LiveSet::random(500, 500, DEFAULT_DENSITY, &mut rng)),
    ];
    let step_counts = [10, 100, 500];

    println!("{:>14} {:>8} {:>12} {:>12} {:>14}", "Pattern", "Gens", "ms/gen", "Population", "Cells/sec");
    println!("{:-<64}", "");

    for (name, seed) in &cases {
        for gens in step_counts {
            let (ms, population) = benchmark(seed, gens);
            let rate = if ms > 0.0 { population as f64 / (ms / 1000.0) } else { 0.0 };
            println!("{:>14} {:>8} {:>12.3} {:>12} {:>14.0}", name, gens, ms, population, rate);
        }
    }
}
