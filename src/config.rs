//! Spawn configuration
//!
//! A [`SpawnConfig`] is an immutable value owned by the caller. Each pattern
//! variant carries only its own parameters. Configs round-trip through JSON:
//!
//! ```json
//! {
//!   "pattern": { "kind": "hex_grid", "spacing": 1.5 },
//!   "count": 19,
//!   "center": [0.0, 0.5, 0.0],
//!   "fixed_height": null
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SpawnError;

/// Layout algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Grid,
    Circle,
    Line,
    Random,
    Spiral,
    HexGrid,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Grid,
        PatternKind::Circle,
        PatternKind::Line,
        PatternKind::Random,
        PatternKind::Spiral,
        PatternKind::HexGrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Grid => "grid",
            PatternKind::Circle => "circle",
            PatternKind::Line => "line",
            PatternKind::Random => "random",
            PatternKind::Spiral => "spiral",
            PatternKind::HexGrid => "hex_grid",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(PatternKind::Grid),
            "circle" => Some(PatternKind::Circle),
            "line" => Some(PatternKind::Line),
            "random" => Some(PatternKind::Random),
            "spiral" => Some(PatternKind::Spiral),
            "hex_grid" | "hexgrid" | "hex" => Some(PatternKind::HexGrid),
            _ => None,
        }
    }

    /// Default parameters for this kind
    pub fn default_pattern(&self) -> Pattern {
        match self {
            PatternKind::Grid => Pattern::Grid(GridParams::default()),
            PatternKind::Circle => Pattern::Circle(CircleParams::default()),
            PatternKind::Line => Pattern::Line(LineParams::default()),
            PatternKind::Random => Pattern::Random(RandomParams::default()),
            PatternKind::Spiral => Pattern::Spiral(SpiralParams::default()),
            PatternKind::HexGrid => Pattern::HexGrid(HexGridParams::default()),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Row count (0 = derive from count)
    pub rows: u32,
    /// Column count (0 = derive from count)
    pub columns: u32,
    pub spacing: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            spacing: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    pub radius: f32,
    /// Full height span of the tilted ring; point `i` rises by `height_variation * i / count`
    pub height_variation: f32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: 5.0,
            height_variation: 0.0,
        }
    }
}

/// Axis a line pattern runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDirection {
    /// +Z
    #[default]
    Forward,
    /// +X
    Right,
    /// +Y
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    pub direction: LineDirection,
    pub spacing: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            direction: LineDirection::Forward,
            spacing: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomParams {
    /// Full box extents; samples fall within center ± area_size / 2
    pub area_size: Vec3,
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            area_size: Vec3::new(10.0, 0.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    /// Approximate arc length between consecutive points
    pub spacing: f32,
    pub height_variation: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            height_variation: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexGridParams {
    pub spacing: f32,
}

impl Default for HexGridParams {
    fn default() -> Self {
        Self { spacing: 1.5 }
    }
}

/// Pattern selector with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    Grid(GridParams),
    Circle(CircleParams),
    Line(LineParams),
    Random(RandomParams),
    Spiral(SpiralParams),
    HexGrid(HexGridParams),
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Grid(_) => PatternKind::Grid,
            Pattern::Circle(_) => PatternKind::Circle,
            Pattern::Line(_) => PatternKind::Line,
            Pattern::Random(_) => PatternKind::Random,
            Pattern::Spiral(_) => PatternKind::Spiral,
            Pattern::HexGrid(_) => PatternKind::HexGrid,
        }
    }

    /// Whether generation draws from a random source
    pub fn needs_random_source(&self) -> bool {
        matches!(self, Pattern::Random(_))
    }

    fn validate(&self) -> Result<(), SpawnError> {
        match self {
            Pattern::Grid(p) => require_positive(p.spacing, "grid spacing must be positive"),
            Pattern::Circle(p) => {
                if !p.radius.is_finite() || p.radius < 0.0 {
                    return Err(SpawnError::InvalidConfig(
                        "circle radius must be non-negative",
                    ));
                }
                require_finite(p.height_variation, "circle height variation must be finite")
            }
            Pattern::Line(p) => require_finite(p.spacing, "line spacing must be finite"),
            Pattern::Random(p) => {
                if !p.area_size.is_finite() || p.area_size.min_element() < 0.0 {
                    return Err(SpawnError::InvalidConfig(
                        "random area size must be non-negative",
                    ));
                }
                Ok(())
            }
            Pattern::Spiral(p) => {
                require_positive(p.spacing, "spiral spacing must be positive")?;
                require_finite(p.height_variation, "spiral height variation must be finite")
            }
            Pattern::HexGrid(p) => require_positive(p.spacing, "hex grid spacing must be positive"),
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Grid(GridParams::default())
    }
}

fn require_positive(value: f32, msg: &'static str) -> Result<(), SpawnError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpawnError::InvalidConfig(msg))
    }
}

fn require_finite(value: f32, msg: &'static str) -> Result<(), SpawnError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpawnError::InvalidConfig(msg))
    }
}

/// Everything a generator call needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub pattern: Pattern,
    pub count: u32,
    /// Pattern origin in world space
    #[serde(default)]
    pub center: Vec3,
    /// Forces every point to this Y when set
    #[serde(default)]
    pub fixed_height: Option<f32>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            count: 9,
            center: Vec3::ZERO,
            fixed_height: None,
        }
    }
}

impl SpawnConfig {
    pub fn new(pattern: Pattern, count: u32) -> Self {
        Self {
            pattern,
            count,
            ..Self::default()
        }
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    pub fn with_fixed_height(mut self, height: f32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn kind(&self) -> PatternKind {
        self.pattern.kind()
    }

    /// Height used by patterns whose natural height is the center's
    #[inline]
    pub fn base_height(&self) -> f32 {
        self.fixed_height.unwrap_or(self.center.y)
    }

    /// Check every parameter the selected pattern relies on
    pub fn validate(&self) -> Result<(), SpawnError> {
        if !self.center.is_finite() {
            return Err(SpawnError::InvalidConfig("center must be finite"));
        }
        if let Some(h) = self.fixed_height {
            require_finite(h, "fixed height must be finite")?;
        }
        self.pattern.validate()
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SpawnError> {
        let config: SpawnConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpawnError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded {} spawn config from {} ({} points)",
            config.kind(),
            path.display(),
            config.count
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SpawnError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
