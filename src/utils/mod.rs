//! Utility modules for timing and output.

pub mod cpu_affinity;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use timer::{time_calls, PassTiming};
