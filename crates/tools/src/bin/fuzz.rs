use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use sightline_core::{SightLineCache, rasterize, to_cell_lens};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    segments: u32,
    /// Points sampled along each segment by the reference sampler
    #[arg(long, default_value_t = 4_000)]
    samples: u32,
    #[arg(long, default_value_t = 64)]
    threads: usize,
}

fn coord(rng: &mut ChaCha8Rng) -> f64 {
    let unit = (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64;
    // Snap a quarter of the coordinates onto cell centers or edges to hit corner cases.
    match rng.next_u64() % 8 {
        0 => ((unit * 80.0 - 40.0).round()) + 0.5,
        1 => (unit * 80.0 - 40.0).round(),
        _ => unit * 80.0 - 40.0,
    }
}

fn check_segment(x0: f64, y0: f64, x1: f64, y1: f64, samples: u32) -> Result<(), String> {
    let line = rasterize(x0, y0, x1, y1);
    let mut seen = BTreeSet::new();
    for cell in line.iter() {
        if !seen.insert((cell.x, cell.y)) {
            return Err(format!("duplicate cell {cell:?}"));
        }
    }
    if line.windows(2).any(|w| w[0].len > w[1].len) {
        return Err("len is not monotonic".to_string());
    }
    if to_cell_lens(&line).windows(2).any(|w| w[0].len > w[1].len) {
        return Err("cell len is not monotonic".to_string());
    }
    for k in 0..=samples {
        let t = f64::from(k) / f64::from(samples);
        let cell = ((x0 + (x1 - x0) * t).floor() as i32, (y0 + (y1 - y0) * t).floor() as i32);
        if !seen.contains(&cell) {
            return Err(format!("sampled cell {cell:?} at t={t} is missing"));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    println!("Starting raster fuzz on seed {} for {} segments...", args.seed, args.segments);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for i in 0..args.segments {
        let (x0, y0, x1, y1) = (coord(&mut rng), coord(&mut rng), coord(&mut rng), coord(&mut rng));
        if let Err(reason) = check_segment(x0, y0, x1, y1, args.samples) {
            bail!("Invariant failed on segment {i} ({x0}, {y0}) -> ({x1}, {y1}): {reason}");
        }
    }

    println!("Starting cache stress with {} threads...", args.threads);
    let cache = Arc::new(SightLineCache::new());
    let handles: Vec<_> = (0..args.threads)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for round in 0..20 {
                    let table = cache.get_or_build(((worker + round) % 12) as i32);
                    assert_eq!(table.len(), 360);
                }
            })
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            bail!("cache stress worker panicked");
        }
    }
    if cache.build_count() != cache.len() {
        bail!("Invariant failed: {} builds for {} radii", cache.build_count(), cache.len());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
