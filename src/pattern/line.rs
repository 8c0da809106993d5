//! Straight line of points straddling the center

use glam::Vec3;

use crate::Point3;
use crate::config::{LineDirection, LineParams, SpawnConfig};

impl LineDirection {
    /// Unit axis in world space
    pub fn axis(&self) -> Vec3 {
        match self {
            LineDirection::Forward => Vec3::Z,
            LineDirection::Right => Vec3::X,
            LineDirection::Up => Vec3::Y,
        }
    }
}

/// Line positions spaced by `spacing`, total span `(count - 1) * spacing`
/// centered on the config center.
///
/// Off-axis height follows `fixed_height` unless the line runs up, where the
/// generated Y wins.
pub fn line(config: &SpawnConfig, params: &LineParams) -> Vec<Point3> {
    let count = config.count as usize;
    let start = -((count as f32 - 1.0) * params.spacing) / 2.0;
    let axis = params.direction.axis();

    (0..count)
        .map(|i| {
            let mut p = config.center + axis * (start + i as f32 * params.spacing);
            if params.direction != LineDirection::Up {
                p.y = config.base_height();
            }
            p
        })
        .collect()
}
