/// Evaluation throughput benchmarks for every registered calculator.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for input
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use pellcalc_core::{Engine, EngineConfig, EngineError, Values};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic value records.
fn make_records(n: usize, seed: u64) -> Vec<Values> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..n)
        .map(|_| {
            let dep = if next_f64() < 0.5 {
                "Dependent"
            } else {
                "Independent"
            };
            Values::new()
                .with("agi", (next_f64() * 120_000.0).floor())
                .with("fam", 1.0 + (next_f64() * 9.0).floor())
                .with("chi", (next_f64() * 5.0).floor())
                .with("col", (next_f64() * 3.0).floor())
                .with("dep", dep)
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_calculator(
    engine: &Engine,
    id: &str,
    records: &[Values],
) -> Result<Duration, EngineError> {
    let run = || -> Result<f64, EngineError> {
        let mut total = 0.0;
        for v in records {
            total += engine.evaluate(id, v)?;
        }
        Ok(total)
    };

    // Warmup, and surface any evaluation error before timing.
    black_box(run()?);

    Ok(median_time(|| {
        let _ = black_box(run());
    }))
}

fn main() -> Result<(), EngineError> {
    let engine = Engine::new(EngineConfig::default())?;
    let sizes = [1_000, 10_000, 100_000];

    println!("Calculator Evaluation Benchmarks");
    println!("============================================================");
    println!("{:<26} {:>7}   {:>12}", "Calculator", "N", "Median (ms)");
    println!("--------------------------------------------------");

    for &n in &sizes {
        let records = make_records(n, 42);
        for calc in engine.list_calculators() {
            let dur = bench_calculator(&engine, &calc.id, &records)?;
            let ms = dur.as_secs_f64() * 1000.0;
            println!("{:<26} {:>7}      {:>8.2}", calc.id, n, ms);
        }
    }

    println!("============================================================");
    Ok(())
}
