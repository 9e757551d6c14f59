//! Timing harness for the dispatch measurements.
//!
//! Wall-clock timing with `std::time::Instant` (monotonic), reported in
//! whole microseconds. The measured region performs no allocation and no
//! per-variant branching, so the only difference between two measurements
//! of the same collection is the call mechanism under test.

use std::hint::black_box;
use std::time::Instant;

/// Elapsed time and accumulator value for one timed measurement.
#[derive(Clone, Copy, Debug)]
pub struct PassTiming {
    /// Elapsed wall-clock time in whole microseconds
    pub micros: u64,
    /// Running total of every computed result. Routed through `black_box`
    /// so the loop cannot be eliminated as dead code; used by verification,
    /// never by the report.
    pub checksum: f64,
}

/// Visit every element of `items` once per iteration (`iters` full passes
/// in original collection order), applying `f` and accumulating each result.
///
/// The accumulator is passed through `black_box` on every addition, the
/// Rust equivalent of a volatile total: the optimizer must assume the value
/// escapes and cannot prove the loop side-effect free.
pub fn time_calls<T, F>(items: &[T], iters: usize, f: F) -> PassTiming
where
    F: Fn(&T) -> f64,
{
    let mut total = 0.0f64;
    let start = Instant::now();

    for _ in 0..iters {
        for item in items {
            total = black_box(total + f(item));
        }
    }

    let elapsed = start.elapsed();

    PassTiming {
        micros: elapsed.as_micros() as u64,
        checksum: total,
    }
}
