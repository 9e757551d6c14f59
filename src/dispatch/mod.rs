//! Dispatch mechanism benchmarks.

pub mod devirtualization;
