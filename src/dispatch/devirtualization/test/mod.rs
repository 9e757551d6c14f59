//! Tests for the devirtualization call paths.

use super::code::{area_of, Circle, Shape};
use std::f64::consts::PI;

const EPSILON: f64 = 1e-9;

/// Verify all four call paths against the reference formula π·r².
pub fn verify_all() -> Result<(), String> {
    let radii = [0.5, 1.0, 2.0, 3.0, 5.0, 7.25, 9.99];

    for &radius in &radii {
        let expected = PI * radius * radius;
        let circle = Circle::new(radius);
        let handle: Box<dyn Shape> = Box::new(circle);

        let paths: [(&str, f64); 4] = [
            ("virtual", handle.area()),
            ("direct", circle.direct_area()),
            ("devirtualized", circle.area()),
            ("generic", area_of(&circle)),
        ];

        for (name, actual) in paths {
            if (actual - expected).abs() >= EPSILON {
                return Err(format!(
                    "Path '{}' failed for radius {}: expected {}, got {}",
                    name, radius, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::devirtualization::{ShapeSet, MAX_RADIUS, MIN_RADIUS};
    use crate::utils::timer::time_calls;

    #[test]
    fn test_all_paths() {
        verify_all().expect("All call paths should produce identical areas");
    }

    #[test]
    fn test_parallel_collections_equal_length() {
        for n in [0usize, 1, 3, 257] {
            let set = ShapeSet::generate(n, 0x1234_5678);
            assert_eq!(set.handles.len(), n);
            assert_eq!(set.circles.len(), n);
            assert_eq!(set.len(), n);
            assert_eq!(set.is_empty(), n == 0);
        }
    }

    #[test]
    fn test_parallel_collections_same_radii() {
        let set = ShapeSet::generate(500, 42);
        for (handle, circle) in set.handles.iter().zip(&set.circles) {
            // Same radius sample at each index, so areas must match exactly
            assert_eq!(handle.area(), circle.direct_area());
        }
    }

    #[test]
    fn test_generated_radii_in_range() {
        let set = ShapeSet::generate(1000, 7);
        for circle in &set.circles {
            let r = circle.radius();
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&r), "radius {} out of range", r);
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let a = ShapeSet::generate(64, 99);
        let b = ShapeSet::generate(64, 99);
        assert_eq!(a.circles, b.circles);
    }

    #[test]
    fn test_fixed_radii_areas() {
        let set = ShapeSet::from_radii(&[2.0, 3.0, 5.0]);
        let expected = [4.0 * PI, 9.0 * PI, 25.0 * PI];

        for (circle, want) in set.circles.iter().zip(expected) {
            assert!((circle.direct_area() - want).abs() < EPSILON);
            assert!((circle.area() - want).abs() < EPSILON);
            assert!((area_of(circle) - want).abs() < EPSILON);
        }
        for (handle, want) in set.handles.iter().zip(expected) {
            assert!((handle.area() - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_fixed_radii_checksum() {
        // radii [2, 3, 5], one pass: total area = (4 + 9 + 25)π = 38π
        let set = ShapeSet::from_radii(&[2.0, 3.0, 5.0]);
        let want = 38.0 * PI;

        let virtual_t = time_calls(&set.handles, 1, |s| s.area());
        let direct_t = time_calls(&set.circles, 1, |c| c.direct_area());
        let devirt_t = time_calls(&set.circles, 1, |c| c.area());
        let generic_t = time_calls(&set.circles, 1, |c| area_of(c));

        for timing in [virtual_t, direct_t, devirt_t, generic_t] {
            assert!((timing.checksum - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_runner_produces_four_results() {
        use crate::registry::{DispatchBenchmark, RunConfig};

        let runner = crate::dispatch::devirtualization::DevirtualizationRunner;
        let config = RunConfig {
            objects: 16,
            iters: 2,
            seed: 1,
        };
        let results = runner.run(&config);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].name, "virtual");
        assert_eq!(results[3].name, "generic");
        // Every path summed the same areas the same number of times
        for result in &results[1..] {
            assert!((result.checksum - results[0].checksum).abs() < 1e-6);
        }
    }
}
