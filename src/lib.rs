//! Spawn Patterns - procedural spawn-position generation
//!
//! Core modules:
//! - `pattern`: Deterministic position generators (grid, circle, line, random, spiral, hex grid)
//! - `config`: Spawn configuration, validation and JSON loading
//! - `rng`: Injected random source and a seeded PCG implementation
//! - `plan`: Staggered spawn schedule handed to the spawner
//! - `error`: Error taxonomy

pub mod config;
pub mod error;
pub mod pattern;
pub mod plan;
pub mod rng;

pub use config::{
    CircleParams, GridParams, HexGridParams, LineDirection, LineParams, Pattern, PatternKind,
    RandomParams, SpawnConfig, SpiralParams,
};
pub use error::SpawnError;
pub use pattern::generate;
pub use plan::{SpawnPlan, SpawnSlot};
pub use rng::{RandomSource, SeededSource};

use glam::Vec3;

/// A generated world position (Y is up)
pub type Point3 = Vec3;

/// Generator constants
pub mod consts {
    /// Added to the spiral radius before dividing, keeps the first step finite
    pub const SPIRAL_EPSILON: f32 = 0.1;
    /// Hex row compression (sqrt(3) / 2)
    pub const HEX_ROW_FACTOR: f32 = 0.866_025_4;
}

/// Convert polar (r, theta) on the ground plane to an (x, 0, z) offset
#[inline]
pub fn polar_to_ground(r: f32, theta: f32) -> Vec3 {
    Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
}

/// Linear height ramp: `base + variation * index / count`.
///
/// The last of `count` points stops one step short of `base + variation`.
#[inline]
pub fn height_ramp(base: f32, variation: f32, index: usize, count: usize) -> f32 {
    base + variation * index as f32 / count.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_ramp_divides_by_count() {
        let ys: Vec<f32> = (0..4).map(|i| height_ramp(0.0, 4.0, i, 4)).collect();
        assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(height_ramp(2.0, 5.0, 0, 1), 2.0);
    }
}
