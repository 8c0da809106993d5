//! Archimedean spiral with roughly constant spacing between points
//!
//! There is no closed-form arc-length parametrization here. Angle and radius
//! are stepped together, and the exact sequence of radii depends on this
//! recurrence:
//!
//! ```text
//! angle_inc = spacing / (radius + SPIRAL_EPSILON)
//! angle    += angle_inc
//! radius   += spacing * angle_inc / TAU
//! ```

use std::f32::consts::TAU;

use crate::config::{SpawnConfig, SpiralParams};
use crate::consts::SPIRAL_EPSILON;
use crate::{Point3, height_ramp, polar_to_ground};

/// Spiral positions starting on the center and winding outward
pub fn spiral(config: &SpawnConfig, params: &SpiralParams) -> Vec<Point3> {
    let count = config.count as usize;
    let mut points = Vec::with_capacity(count);

    let mut angle = 0.0_f32;
    let mut radius = 0.0_f32;

    for i in 0..count {
        let mut p = config.center + polar_to_ground(radius, angle);
        p.y = match config.fixed_height {
            Some(h) => h,
            None => height_ramp(config.center.y, params.height_variation, i, count),
        };
        points.push(p);

        let angle_inc = params.spacing / (radius + SPIRAL_EPSILON);
        angle += angle_inc;
        radius += params.spacing * angle_inc / TAU;
    }

    points
}
