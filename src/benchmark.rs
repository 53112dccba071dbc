//! Benchmark for digest throughput.
//!
//! Hashes lowercase candidates sequentially, the same way a search does.

use anyhow::Result;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::alphabet::Alphabet;
use crate::candidates::Candidates;
use crate::digest::DigestAlgorithm;

/// Candidate length used to fill the benchmark batch.
const BATCH_LENGTH: usize = 3;

#[derive(Debug, Serialize)]
pub struct BenchmarkReport {
    pub name: &'static str,
    pub hashes_per_sec: u64,
    pub total_hashes: u64,
    pub duration_secs: f64,
}

/// Hash a fixed candidate batch repeatedly for `measure` after `warmup`.
pub fn measure(algorithm: DigestAlgorithm, warmup: Duration, measure: Duration) -> BenchmarkReport {
    let function = algorithm.create();
    let alphabet = Alphabet::lowercase();
    let batch: Vec<String> = Candidates::new(&alphabet, BATCH_LENGTH).collect();

    let mut sink = 0u8;
    let mut hash_batch = || {
        for candidate in &batch {
            sink ^= function.digest(candidate.as_bytes())[0];
        }
    };

    let warmup_start = Instant::now();
    while warmup_start.elapsed() < warmup {
        hash_batch();
    }

    let start = Instant::now();
    let mut count = 0u64;
    loop {
        hash_batch();
        count += batch.len() as u64;
        if start.elapsed() >= measure {
            break;
        }
    }

    let duration = start.elapsed().as_secs_f64();
    std::hint::black_box(sink);

    BenchmarkReport {
        name: algorithm.as_str(),
        hashes_per_sec: (count as f64 / duration) as u64,
        total_hashes: count,
        duration_secs: duration,
    }
}

/// Run standardized benchmark for an algorithm.
pub fn run_benchmark(algorithm: DigestAlgorithm, json: bool) -> Result<()> {
    if !json {
        println!("Running Benchmark for {}...", algorithm);
        println!("Time: 2s warmup + 5s measure (approx)");
    }

    let report = measure(algorithm, Duration::from_secs(2), Duration::from_secs(5));

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("------------------------------------------------");
        println!("Result: {:.2} Million Hashes/sec", report.hashes_per_sec as f64 / 1_000_000.0);
        println!("Total:  {} hashes in {:.2}s", report.total_hashes, report.duration_secs);
        println!("------------------------------------------------");
    }

    Ok(())
}
