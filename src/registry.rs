//! Benchmark registry for discovery and execution.
//!
//! This module provides a generic interface for registering and running
//! dispatch benchmarks without needing separate binary files for each.

/// Default number of shape objects per run
pub const DEFAULT_OBJECTS: usize = 10_000;
/// Default number of full passes over the collection
pub const DEFAULT_ITERS: usize = 1_000;

/// Parameters for one benchmark run
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    /// Number of shape objects to generate
    pub objects: usize,
    /// Number of full passes over each collection
    pub iters: usize,
    /// PRNG seed for radius generation
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            objects: DEFAULT_OBJECTS,
            iters: DEFAULT_ITERS,
            seed: rand::random(),
        }
    }
}

/// Result from measuring a single call-path variant
#[derive(Clone, Copy, Debug)]
pub struct VariantResult {
    /// Unique variant identifier (e.g., "virtual")
    pub name: &'static str,
    /// Fixed report label (e.g., "Virtual calls")
    pub label: &'static str,
    /// Elapsed wall-clock time in microseconds
    pub micros: u64,
    /// Accumulated total from the measured loop, kept for verification
    pub checksum: f64,
}

/// Trait that all dispatch benchmarks must implement
pub trait DispatchBenchmark: Send + Sync {
    /// Name of the benchmark (e.g., "devirtualization")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "dispatch")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Run all variants strictly sequentially in their fixed order and
    /// return one result per variant. The first result is the baseline
    /// for speedup ratios.
    fn run(&self, config: &RunConfig) -> Vec<VariantResult>;

    /// Verify correctness of all variants against the reference formula
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all benchmarks
pub struct BenchmarkRegistry {
    benchmarks: Vec<Box<dyn DispatchBenchmark>>,
}

impl BenchmarkRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            benchmarks: Vec::new(),
        }
    }

    /// Register a benchmark
    pub fn register<B: DispatchBenchmark + 'static>(&mut self, bench: B) {
        self.benchmarks.push(Box::new(bench));
    }

    /// Get all registered benchmarks
    pub fn all(&self) -> &[Box<dyn DispatchBenchmark>] {
        &self.benchmarks
    }

    /// Find benchmark by name
    pub fn find(&self, name: &str) -> Option<&dyn DispatchBenchmark> {
        self.benchmarks
            .iter()
            .find(|b| b.name() == name)
            .map(|b| b.as_ref())
    }

    /// List benchmark names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.benchmarks.iter().map(|b| b.name()).collect()
    }
}

impl Default for BenchmarkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all benchmarks
pub fn build_registry() -> BenchmarkRegistry {
    let mut registry = BenchmarkRegistry::new();

    registry.register(crate::dispatch::devirtualization::DevirtualizationRunner);

    registry
}
