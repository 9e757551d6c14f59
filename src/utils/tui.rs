//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. The performance report itself has
//! a fixed layout; terminal-width awareness is only used for the listing
//! output.

use crate::registry::{BenchmarkRegistry, DispatchBenchmark, VariantResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application banner
pub fn print_banner() {
    println!("=== Devirtualization Techniques Demo ===");
}

/// Render the performance report: one duration line per variant, then one
/// speedup ratio per non-baseline variant, relative to the first (virtual)
/// measurement. A zero-duration baseline yields an infinite ratio; that
/// degenerate case is not guarded.
pub fn render_report(results: &[VariantResult]) -> String {
    let mut out = String::new();

    out.push_str("=== Performance Results ===\n");
    for result in results {
        out.push_str(&format!(
            "{:<19} {} us\n",
            format!("{}:", result.label),
            result.micros
        ));
    }

    let baseline = match results.first() {
        Some(b) => b,
        None => return out,
    };

    out.push('\n');
    out.push_str(&format!(
        "Speedup ratios (compared to {}):\n",
        baseline.label.to_lowercase()
    ));
    for result in results.iter().skip(1) {
        let ratio = baseline.micros as f64 / result.micros as f64;
        out.push_str(&format!(
            "{:<19} {}x\n",
            format!("{}:", result.label),
            ratio
        ));
    }

    out
}

/// Print the performance report to stdout
pub fn print_report(results: &[VariantResult]) {
    print!("{}", render_report(results));
}

/// Print benchmark info box
pub fn print_bench_info_box(bench: &dyn DispatchBenchmark) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = bench.available_variants().join(", ");
    let name_line = format!("Benchmark: {}", bench.name());
    let cat_line = format!("Category:  {}", bench.category());
    let desc_line = bench.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dispatch-bench [OPTIONS] [BENCHMARK]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available benchmarks");
    println!("  --help, -h     Show this help message");
    println!("  --objects N    Number of shape objects (default: 10000)");
    println!("  --iters N      Number of passes over the collection (default: 1000)");
    println!("  --seed N       Random seed for reproducible radii (default: entropy)");
    println!();
    println!("Arguments:");
    println!("  BENCHMARK      Name of specific benchmark to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  dispatch-bench                    # Run all benchmarks");
    println!("  dispatch-bench devirtualization   # Run only devirtualization");
    println!("  dispatch-bench --seed 12345       # Reproducible radii");
}

/// Print the list of available benchmarks
pub fn print_available_benchmarks(registry: &BenchmarkRegistry) {
    println!("Available benchmarks:");
    println!();
    for bench in registry.all() {
        print_bench_info_box(bench.as_ref());
    }
}
