//! Evenly spaced ring of points

use std::f32::consts::TAU;

use crate::config::{CircleParams, SpawnConfig};
use crate::{Point3, height_ramp, polar_to_ground};

/// Ring positions, point `i` at angle `i * TAU / count`.
///
/// Without a fixed height the ring tilts: point `i` sits at
/// `center.y + height_variation * i / count`.
pub fn circle(config: &SpawnConfig, params: &CircleParams) -> Vec<Point3> {
    let count = config.count as usize;
    let step = TAU / count as f32;

    (0..count)
        .map(|i| {
            let mut p = config.center + polar_to_ground(params.radius, i as f32 * step);
            p.y = match config.fixed_height {
                Some(h) => h,
                None => height_ramp(config.center.y, params.height_variation, i, count),
            };
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pattern;
    use glam::Vec3;

    fn params(radius: f32, height_variation: f32) -> CircleParams {
        CircleParams {
            radius,
            height_variation,
        }
    }

    fn assert_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_four_points_quarter_turns() {
        let p = params(10.0, 0.0);
        let points = circle(&SpawnConfig::new(Pattern::Circle(p), 4), &p);
        assert_eq!(points.len(), 4);
        assert_near(points[0], Vec3::new(10.0, 0.0, 0.0));
        assert_near(points[1], Vec3::new(0.0, 0.0, 10.0));
        assert_near(points[2], Vec3::new(-10.0, 0.0, 0.0));
        assert_near(points[3], Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn test_all_points_on_radius() {
        let p = params(3.5, 0.0);
        let center = Vec3::new(1.0, 2.0, 3.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 13).with_center(center);
        for point in circle(&cfg, &p) {
            let flat = Vec3::new(point.x - center.x, 0.0, point.z - center.z);
            assert!((flat.length() - 3.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_height_ramp() {
        let p = params(1.0, 4.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 5).with_center(Vec3::new(0.0, 1.0, 0.0));
        let heights: Vec<f32> = circle(&cfg, &p).iter().map(|p| p.y).collect();
        for (got, want) in heights.iter().zip([1.0, 1.8, 2.6, 3.4, 4.2]) {
            assert!((got - want).abs() < 1e-5, "{heights:?}");
        }
    }

    #[test]
    fn test_height_ramp_stops_short_of_full_variation() {
        let p = params(1.0, 4.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 4);
        let heights: Vec<f32> = circle(&cfg, &p).iter().map(|p| p.y).collect();
        assert_eq!(heights, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_point_stays_at_base_height() {
        let p = params(2.0, 4.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 1).with_center(Vec3::new(0.0, 1.0, 0.0));
        let points = circle(&cfg, &p);
        assert_eq!(points, vec![Vec3::new(2.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_fixed_height_overrides_ramp() {
        let p = params(1.0, 4.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 5).with_fixed_height(7.0);
        assert!(circle(&cfg, &p).iter().all(|p| p.y == 7.0));
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let p = params(0.0, 0.0);
        let center = Vec3::new(4.0, 0.0, -1.0);
        let cfg = SpawnConfig::new(Pattern::Circle(p), 6).with_center(center);
        assert!(circle(&cfg, &p).iter().all(|&q| q == center));
    }
}
