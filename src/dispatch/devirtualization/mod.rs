//! # Devirtualization Comparison
//!
//! Measures the same area computation invoked four ways: through a trait
//! object, through an inherent method, through the trait method on a
//! concrete type, and through a monomorphized generic function.

pub mod code;
pub mod test;

use code::{area_of, Circle, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::{DispatchBenchmark, RunConfig, VariantResult};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::timer::time_calls;

/// Radius range for generated circles
pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 10.0;

/// Two parallel collections built from the same radius samples: one of
/// owning polymorphic handles, one of concrete values. Read-only after
/// construction.
pub struct ShapeSet {
    pub handles: Vec<Box<dyn Shape>>,
    pub circles: Vec<Circle>,
}

impl ShapeSet {
    /// Generate `objects` circles with radii drawn uniformly from
    /// [MIN_RADIUS, MAX_RADIUS) using a seeded PRNG.
    pub fn generate(objects: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let radii: Vec<f64> = (0..objects)
            .map(|_| rng.random_range(MIN_RADIUS..MAX_RADIUS))
            .collect();
        Self::from_radii(&radii)
    }

    /// Build both collections in lock-step from a literal radius sequence.
    pub fn from_radii(radii: &[f64]) -> Self {
        let mut handles: Vec<Box<dyn Shape>> = Vec::with_capacity(radii.len());
        let mut circles = Vec::with_capacity(radii.len());
        for &radius in radii {
            handles.push(Box::new(Circle::new(radius)));
            circles.push(Circle::new(radius));
        }
        Self { handles, circles }
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

pub struct DevirtualizationRunner;

impl DispatchBenchmark for DevirtualizationRunner {
    fn name(&self) -> &'static str {
        "devirtualization"
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn description(&self) -> &'static str {
        "Virtual vs direct vs devirtualized vs generic area computation on circles"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn run(&self, config: &RunConfig) -> Vec<VariantResult> {
        let set = ShapeSet::generate(config.objects, config.seed);
        let iters = config.iters;

        // Pin for the whole sequence so the scheduler cannot migrate the
        // thread between measurements.
        let _pin = CpuPinGuard::new();

        // Fixed order: later paths inherit cache warmth from earlier ones.
        // That carry-over is part of the benchmark design.
        let virtual_t = time_calls(&set.handles, iters, |shape| shape.area());
        let direct_t = time_calls(&set.circles, iters, |circle| circle.direct_area());
        let devirt_t = time_calls(&set.circles, iters, |circle| circle.area());
        let generic_t = time_calls(&set.circles, iters, |circle| area_of(circle));

        let timings = [virtual_t, direct_t, devirt_t, generic_t];

        code::get_variants()
            .into_iter()
            .zip(timings)
            .map(|(v, t)| VariantResult {
                name: v.name,
                label: v.label,
                micros: t.micros,
                checksum: t.checksum,
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
