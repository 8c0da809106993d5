//! Hexagonal rings around a center point
//!
//! Ring `r` holds up to `6r` points at angles `j * 60° / r`. Z is compressed
//! by the hex row factor, so ring points lie on an ellipse with semi-axes
//! `r * spacing` (X) and `r * spacing * sqrt(3) / 2` (Z).

use std::f32::consts::FRAC_PI_3;

use glam::Vec3;

use crate::Point3;
use crate::config::{HexGridParams, SpawnConfig};
use crate::consts::HEX_ROW_FACTOR;

/// Outer-loop ring limit for `count` points; always enough rings to hold them
pub fn hex_ring_bound(count: u32) -> u32 {
    (count as f64 / 3.0).sqrt().ceil() as u32
}

/// Hex ring positions, truncated mid-ring once `count` points exist
pub fn hex_grid(config: &SpawnConfig, params: &HexGridParams) -> Vec<Point3> {
    let count = config.count as usize;
    let mut points = Vec::with_capacity(count);
    if count == 0 {
        return points;
    }

    let height = config.base_height();
    let hex_width = params.spacing;
    let hex_height = params.spacing * HEX_ROW_FACTOR;

    points.push(Vec3::new(config.center.x, height, config.center.z));

    'rings: for ring in 1..=hex_ring_bound(config.count) {
        let r = ring as f32;
        let step = FRAC_PI_3 / r;
        for j in 0..6 * ring {
            if points.len() >= count {
                break 'rings;
            }
            let angle = j as f32 * step;
            points.push(Vec3::new(
                config.center.x + angle.cos() * r * hex_width,
                height,
                config.center.z + angle.sin() * r * hex_height,
            ));
        }
    }

    points
}
