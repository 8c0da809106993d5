//! Rectangular grid layout
//!
//! Columns run along X, rows along Z. The whole block is centered on the
//! config center and filled row-major, so a count that is not a full
//! rectangle leaves the last row partially filled.

use glam::Vec3;

use crate::Point3;
use crate::config::{GridParams, SpawnConfig};

/// Resolve `(rows, columns)`, deriving any zero dimension from `count`
pub fn grid_dimensions(params: &GridParams, count: u32) -> (u32, u32) {
    match (params.rows, params.columns) {
        (0, 0) => {
            let columns = ((count as f64).sqrt().ceil() as u32).max(1);
            (count.div_ceil(columns), columns)
        }
        (0, columns) => (count.div_ceil(columns), columns),
        (rows, 0) => (rows, count.div_ceil(rows)),
        (rows, columns) => (rows, columns),
    }
}

/// Grid positions; yields `min(count, rows * columns)` points
pub fn grid(config: &SpawnConfig, params: &GridParams) -> Vec<Point3> {
    let (rows, columns) = grid_dimensions(params, config.count);
    let capacity = (rows as u64 * columns as u64).min(config.count as u64) as usize;

    let spacing = params.spacing;
    let start_x = -((columns as f32 - 1.0) * spacing) / 2.0;
    let start_z = -((rows as f32 - 1.0) * spacing) / 2.0;
    let height = config.base_height();

    let mut points = Vec::with_capacity(capacity);
    'rows: for row in 0..rows {
        for col in 0..columns {
            if points.len() >= capacity {
                break 'rows;
            }
            points.push(Vec3::new(
                config.center.x + start_x + col as f32 * spacing,
                height,
                config.center.z + start_z + row as f32 * spacing,
            ));
        }
    }
    points
}
