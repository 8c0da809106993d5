//! Staggered spawn schedule
//!
//! The spawner instantiates one object per slot once its delay has elapsed.
//! Slot order is generation order.

use serde::{Deserialize, Serialize};

use crate::Point3;
use crate::config::{PatternKind, SpawnConfig};
use crate::error::SpawnError;
use crate::pattern::generate;
use crate::rng::RandomSource;

/// One object to spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSlot {
    /// Position in generation order
    pub index: u32,
    pub position: Point3,
    /// Seconds after the plan starts
    pub delay: f32,
}

/// Generated positions paired with their spawn delays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlan {
    pub kind: PatternKind,
    /// Seconds between consecutive slots
    pub stagger: f32,
    /// Seed of the source the positions were drawn from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub slots: Vec<SpawnSlot>,
}

impl SpawnPlan {
    /// Generate positions for `config` and give slot `i` a delay of `i * stagger`
    pub fn build(
        config: &SpawnConfig,
        rng: Option<&mut dyn RandomSource>,
        stagger: f32,
    ) -> Result<Self, SpawnError> {
        if !stagger.is_finite() || stagger < 0.0 {
            return Err(SpawnError::InvalidConfig(
                "stagger must be a non-negative number of seconds",
            ));
        }

        let slots = generate(config, rng)?
            .into_iter()
            .enumerate()
            .map(|(i, position)| SpawnSlot {
                index: i as u32,
                position,
                delay: i as f32 * stagger,
            })
            .collect();

        Ok(Self {
            kind: config.kind(),
            stagger,
            seed: None,
            slots,
        })
    }

    /// Record the seed used, so the plan can be rebuilt from its JSON
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Delay of the last slot (0 when empty)
    pub fn total_duration(&self) -> f32 {
        self.slots.last().map(|s| s.delay).unwrap_or(0.0)
    }

    /// Slots whose delay has elapsed, in order
    pub fn due(&self, elapsed: f32) -> impl Iterator<Item = &SpawnSlot> {
        self.slots.iter().take_while(move |s| s.delay <= elapsed)
    }

    /// Positions only, in slot order
    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.slots.iter().map(|s| s.position)
    }
}
