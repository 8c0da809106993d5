//! Uniform scatter inside an axis-aligned box

use glam::Vec3;

use crate::Point3;
use crate::config::{RandomParams, SpawnConfig};
use crate::rng::RandomSource;

/// Scatter `count` points in `center ± area_size / 2`.
///
/// Draw order per point is X, Z, then Y (Y only when no fixed height is set),
/// so a given source state always maps to the same sequence.
pub fn random(
    config: &SpawnConfig,
    params: &RandomParams,
    rng: &mut dyn RandomSource,
) -> Vec<Point3> {
    let half = params.area_size / 2.0;
    let center = config.center;

    (0..config.count)
        .map(|_| {
            let x = center.x + rng.next_uniform(-half.x, half.x);
            let z = center.z + rng.next_uniform(-half.z, half.z);
            let y = match config.fixed_height {
                Some(h) => h,
                None => center.y + rng.next_uniform(-half.y, half.y),
            };
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pattern;
    use crate::rng::SeededSource;
    use proptest::prelude::*;

    /// Replays a fixed list of unit samples, mapped into the requested range
    struct Scripted {
        samples: Vec<f32>,
        next: usize,
    }

    impl RandomSource for Scripted {
        fn next_uniform(&mut self, low: f32, high: f32) -> f32 {
            let t = self.samples[self.next % self.samples.len()];
            self.next += 1;
            low + (high - low) * t
        }
    }

    fn config(area_size: Vec3, count: u32) -> (SpawnConfig, RandomParams) {
        let params = RandomParams { area_size };
        (SpawnConfig::new(Pattern::Random(params), count), params)
    }

    #[test]
    fn test_draw_order() {
        let (cfg, params) = config(Vec3::new(10.0, 4.0, 20.0), 1);
        let mut rng = Scripted {
            samples: vec![0.0, 1.0, 0.5],
            next: 0,
        };
        let points = random(&cfg, &params, &mut rng);
        // X from first draw, Z from second, Y from third
        assert_eq!(points, vec![Vec3::new(-5.0, 0.0, 10.0)]);
        assert_eq!(rng.next, 3);
    }

    #[test]
    fn test_fixed_height_skips_y_draw() {
        let (cfg, params) = config(Vec3::new(2.0, 2.0, 2.0), 4);
        let cfg = cfg.with_fixed_height(1.0);
        let mut rng = Scripted {
            samples: vec![0.25],
            next: 0,
        };
        let points = random(&cfg, &params, &mut rng);
        assert_eq!(rng.next, 8);
        assert!(points.iter().all(|p| p.y == 1.0));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let (cfg, params) = config(Vec3::new(30.0, 5.0, 30.0), 50);
        let a = random(&cfg, &params, &mut SeededSource::new(77));
        let b = random(&cfg, &params, &mut SeededSource::new(77));
        let c = random(&cfg, &params, &mut SeededSource::new(78));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_area_collapses() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let (cfg, params) = config(Vec3::ZERO, 5);
        let cfg = cfg.with_center(center);
        let points = random(&cfg, &params, &mut SeededSource::new(1));
        assert!(points.iter().all(|&p| p == center));
    }

    proptest! {
        #[test]
        fn prop_points_inside_box(
            seed in any::<u64>(),
            count in 1u32..100,
            ax in 0.0f32..100.0,
            ay in 0.0f32..100.0,
            az in 0.0f32..100.0,
            cx in -50.0f32..50.0,
            cz in -50.0f32..50.0,
        ) {
            let area = Vec3::new(ax, ay, az);
            let center = Vec3::new(cx, 3.0, cz);
            let (cfg, params) = config(area, count);
            let cfg = cfg.with_center(center);
            let points = random(&cfg, &params, &mut SeededSource::new(seed));
            let tolerance = 1e-3;
            for p in points {
                prop_assert!((p.x - center.x).abs() <= ax / 2.0 + tolerance);
                prop_assert!((p.y - center.y).abs() <= ay / 2.0 + tolerance);
                prop_assert!((p.z - center.z).abs() <= az / 2.0 + tolerance);
            }
        }
    }
}
