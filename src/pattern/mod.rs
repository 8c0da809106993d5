//! Deterministic spawn-position generators
//!
//! Every generator is a pure function of the config. Only the random pattern
//! consumes an injected source:
//! - Index order is generation order and is reproducible
//! - No logging, no global state
//! - No scene, physics or frame-timing dependencies

pub mod circle;
pub mod grid;
pub mod hex;
pub mod line;
pub mod random;
pub mod spiral;

pub use circle::circle;
pub use grid::{grid, grid_dimensions};
pub use hex::{hex_grid, hex_ring_bound};
pub use line::line;
pub use random::random;
pub use spiral::spiral;

use crate::Point3;
use crate::config::{Pattern, SpawnConfig};
use crate::error::SpawnError;
use crate::rng::RandomSource;

/// Generate the positions described by `config`.
///
/// Validation runs first, so a bad parameter is reported even when
/// `count == 0`. A valid config with `count == 0` yields an empty sequence.
/// `rng` is only read by [`Pattern::Random`], which fails with
/// [`SpawnError::MissingRandomSource`] when it is `None`.
pub fn generate(
    config: &SpawnConfig,
    rng: Option<&mut dyn RandomSource>,
) -> Result<Vec<Point3>, SpawnError> {
    config.validate()?;
    if config.count == 0 {
        return Ok(Vec::new());
    }

    let points = match &config.pattern {
        Pattern::Grid(params) => grid(config, params),
        Pattern::Circle(params) => circle(config, params),
        Pattern::Line(params) => line(config, params),
        Pattern::Random(params) => {
            let rng = rng.ok_or(SpawnError::MissingRandomSource)?;
            random(config, params, rng)
        }
        Pattern::Spiral(params) => spiral(config, params),
        Pattern::HexGrid(params) => hex_grid(config, params),
    };
    Ok(points)
}
