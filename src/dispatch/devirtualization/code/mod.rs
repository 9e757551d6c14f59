//! Call-path variants for the devirtualization comparison.

pub mod shapes;

pub use shapes::{area_of, Circle, Shape};

/// Variant descriptor. The actual call sites live in the runner because
/// each path iterates a differently-typed collection.
pub struct VariantInfo {
    /// Unique identifier for this variant (e.g., "virtual")
    pub name: &'static str,
    /// Fixed label used in the report
    pub label: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// Returns all variants, in measurement order. The first entry is the
/// baseline for speedup ratios.
pub fn get_variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo {
            name: "virtual",
            label: "Virtual calls",
            description: "Trait method through a Box<dyn Shape> handle (vtable lookup)",
        },
        VariantInfo {
            name: "direct",
            label: "Direct calls",
            description: "Inherent method on a concrete Circle (no dispatch capability)",
        },
        VariantInfo {
            name: "devirtualized",
            label: "Devirtualized",
            description: "Trait method on a concrete Circle (statically resolvable)",
        },
        VariantInfo {
            name: "generic",
            label: "Generic calls",
            description: "Generic function monomorphized for Circle",
        },
    ]
}
