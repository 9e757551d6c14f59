//! CLI for running the dispatch benchmarks.
//!
//! Usage:
//!   dispatch-bench                    # Run all benchmarks with defaults
//!   dispatch-bench --list             # List available benchmarks
//!   dispatch-bench devirtualization   # Run specific benchmark
//!   dispatch-bench --help             # Show help

use dispatch_bench::registry::{build_registry, RunConfig, DEFAULT_ITERS, DEFAULT_OBJECTS};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut objects: usize = DEFAULT_OBJECTS;
    let mut iters: usize = DEFAULT_ITERS;
    let mut seed: Option<u64> = None;
    let mut benchmark_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--objects" => {
                i += 1;
                if i < args.len() {
                    objects = args[i].parse().unwrap_or(DEFAULT_OBJECTS);
                }
            }
            "--iters" => {
                i += 1;
                if i < args.len() {
                    iters = args[i].parse().unwrap_or(DEFAULT_ITERS);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            arg if !arg.starts_with('-') => {
                benchmark_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        dispatch_bench::tui::print_help();
        return;
    }

    if show_list {
        dispatch_bench::tui::print_available_benchmarks(&registry);
        return;
    }

    let config = RunConfig {
        objects,
        iters,
        seed: seed.unwrap_or_else(rand::random),
    };

    dispatch_bench::tui::print_banner();
    println!();
    println!("Testing with {} objects, {} iters each", objects, iters);
    println!();

    match benchmark_filter {
        Some(name) => match registry.find(&name) {
            Some(bench) => {
                let results = bench.run(&config);
                dispatch_bench::tui::print_report(&results);
            }
            None => {
                eprintln!("Benchmark '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => {
            for bench in registry.all() {
                let results = bench.run(&config);
                dispatch_bench::tui::print_report(&results);
            }
        }
    }
}
