//! # Dispatch-Bench
//!
//! Micro-benchmarks comparing the wall-clock cost of dispatch mechanisms:
//! virtual (trait object), direct (inherent method), devirtualized (trait
//! method on a concrete type) and generic (monomorphized function).

pub mod dispatch;
pub mod registry;
pub mod utils;

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::devirtualization;
    pub use crate::registry::{build_registry, BenchmarkRegistry, DispatchBenchmark, RunConfig};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_benchmarks_registry_verify() {
        let registry = build_registry();
        let benchmarks = registry.all();

        println!("Verifying {} benchmarks...", benchmarks.len());

        for bench in benchmarks {
            println!("Verifying benchmark: {}", bench.name());
            match bench.verify() {
                Ok(_) => println!("  ✅ Benchmark '{}' passed verification", bench.name()),
                Err(e) => panic!(
                    "  ❌ Benchmark '{}' failed verification: {}",
                    bench.name(),
                    e
                ),
            }
        }
    }
}
