//! Shape model used by the devirtualization benchmark.
//!
//! All area paths must spell out the exact same floating-point expression.
//! The benchmark compares call mechanisms; any difference in arithmetic
//! would invalidate the comparison.

use std::f64::consts::PI;

/// Capability over shape variants: resolved through a vtable when called
/// on a `dyn Shape` handle.
pub trait Shape {
    fn area(&self) -> f64;
}

/// The only shape variant. Plain value type, owned by the collections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Inherent method: never dispatchable, the call target is fixed at
    /// compile time.
    pub fn direct_area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Generic path: monomorphized per concrete type, so the trait call below
/// is resolved statically. Rust's rendition of template specialization.
pub fn area_of<S: Shape>(shape: &S) -> f64 {
    shape.area()
}
