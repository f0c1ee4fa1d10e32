//! Simulation tuning knobs
//!
//! Every probability is an `f32` in [0, 1], tested with one fresh uniform
//! roll per check (`roll < p`).

use serde::{Deserialize, Serialize};

use crate::util::{SimError, SimResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Downward acceleration in cells/s²
    pub gravity: f32,
    /// Step length used by `step()`
    pub step_seconds: f32,
    /// Chance a decaying particle loses life on a given tick
    pub decay_chance: f32,
    /// Chance an idle fire puffs smoke into the cell above
    pub fire_smoke_chance: f32,
    pub lava_smoke_chance: f32,
    /// Chance that lava (rather than water) survives a lava/water contact
    pub lava_quench_chance: f32,
    /// Disc radius used when spawning stuck materials
    pub stuck_brush_radius: i32,
    /// Maximum live particles; `None` means one per cell
    pub particle_limit: Option<usize>,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            step_seconds: 1.0 / 60.0,
            decay_chance: 0.4,
            fire_smoke_chance: 1.0 / 15.0,
            lava_smoke_chance: 0.02,
            lava_quench_chance: 0.5,
            stuck_brush_radius: 3,
            particle_limit: None,
            seed: 12345,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidConfig("gravity must be finite".into()));
        }
        if !self.step_seconds.is_finite() || self.step_seconds <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.step_seconds));
        }

        let probabilities = [
            ("decayChance", self.decay_chance),
            ("fireSmokeChance", self.fire_smoke_chance),
            ("lavaSmokeChance", self.lava_smoke_chance),
            ("lavaQuenchChance", self.lava_quench_chance),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidConfig(format!("{} {} outside [0, 1]", name, p)));
            }
        }

        if !(0..=64).contains(&self.stuck_brush_radius) {
            return Err(SimError::InvalidConfig(format!(
                "stuckBrushRadius {} outside [0, 64]",
                self.stuck_brush_radius
            )));
        }
        Ok(())
    }

    /// Effective particle budget for a grid of `cells` cells.
    pub fn limit_for(&self, cells: usize) -> usize {
        self.particle_limit.map_or(cells, |l| l.min(cells))
    }
}
