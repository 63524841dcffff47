/// Pure Rust core benchmarks for the DOC pipeline.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG to vary the
/// aircraft, and std::hint::black_box to prevent dead-code elimination.
/// Set RUST_LOG (e.g. `RUST_LOG=airdoc_core=info`) to see solver output.
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use airdoc_core::calibration::{fit_maintenance, CalibrationConfig, FitParameter};
use airdoc_core::reference;
use airdoc_core::{calculate_costs, maintenance_sensitivity, AircraftSpec, MethodCoefficients};

const REPEATS: usize = 7;
const TARGET_YEAR: i32 = 2025;

/// Fleet of `n` ERJ-145 variants with scattered weights and thrust.
fn make_fleet(n: usize, seed: u64) -> Vec<AircraftSpec> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let base = reference::erj145_xr().aircraft;
    (0..n)
        .map(|_| AircraftSpec {
            max_takeoff_weight_kg: base.max_takeoff_weight_kg * (0.8 + 0.4 * next_f64()),
            operational_empty_weight_kg: base.operational_empty_weight_kg
                * (0.8 + 0.4 * next_f64()),
            takeoff_thrust_per_engine_n: base.takeoff_thrust_per_engine_n
                * (0.8 + 0.4 * next_f64()),
            flight_time_hours: 0.5 + 2.5 * next_f64(),
            ..base
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

fn bench_calculate_costs(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let method = MethodCoefficients::default();
    let mut results = Vec::new();

    for &n in sizes {
        let fleet = make_fleet(n, 42);

        // Warmup
        for a in &fleet {
            let _ = black_box(calculate_costs(a, &method, TARGET_YEAR));
        }

        let dur = median_time(|| {
            for a in &fleet {
                let _ = black_box(calculate_costs(a, &method, TARGET_YEAR));
            }
        });
        results.push(("calculate_costs", n, dur));
    }
    results
}

fn bench_sensitivity(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let method = MethodCoefficients::default();
    let fractions = [-0.2, -0.1, 0.1, 0.2];
    let mut results = Vec::new();

    for &n in sizes {
        let fleet = make_fleet(n, 7);

        let dur = median_time(|| {
            for a in &fleet {
                let _ = black_box(maintenance_sensitivity(a, &method, &fractions, TARGET_YEAR));
            }
        });
        results.push(("sensitivity", n, dur));
    }
    results
}

fn bench_calibration() -> Vec<(&'static str, usize, Duration)> {
    let method = MethodCoefficients::default();
    let targets: Vec<_> = reference::regional_jets().iter().map(|r| r.target()).collect();
    let params = FitParameter::defaults();
    let config = CalibrationConfig::default();

    let dur = median_time(|| {
        let _ = black_box(fit_maintenance(&method, &targets, &params, &config));
    });
    vec![("calibration", targets.len(), dur)]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Operation", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_calculate_costs(&[100, 10_000]));
    all_results.extend(bench_sensitivity(&[10, 100]));
    all_results.extend(bench_calibration());

    for (op, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", op, n, ms);
    }

    println!("============================================================");
}
