//! Behaviors - per-phase update rules
//!
//! One behavior per mobility class. The registry dispatches on the
//! particle's phase with a closed `match`; each behavior reads and writes
//! the grid only through `UpdateContext`.

mod solid;
mod liquid;
mod gas;
mod stuck;
mod combustion;

pub use solid::SolidBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;
pub use stuck::StuckBehavior;

use crate::domain::config::SimConfig;
use crate::domain::materials::{Material, MaterialProps, MaterialTable, Phase};
use crate::domain::particle::Particle;
use crate::domain::vec2::Vec2;
use crate::grid::Grid;
use crate::movement::{self, TraceOutcome, TraceProfile};
use crate::util::RandomSource;

/// Per-tick event tallies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub processed: u32,
    pub moved: u32,
    pub swaps: u32,
    pub ignitions: u32,
    pub extinguished: u32,
    pub expired: u32,
    pub emitted: u32,
}

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub table: &'a MaterialTable,
    pub config: &'a SimConfig,
    pub rng: &'a mut dyn RandomSource,
    pub counters: &'a mut StepCounters,
    pub x: i32,
    pub y: i32,
    pub dt: f32,
    /// Live-particle budget; in-tick emissions are dropped once it is reached
    pub particle_limit: usize,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn props(&self, material: Material) -> &'a MaterialProps {
        self.table.get(material)
    }

    #[inline]
    pub fn phase_at(&self, x: i32, y: i32) -> Option<Phase> {
        self.grid.get(x, y).map(|p| self.table.phase(p.material))
    }

    /// In bounds and either empty or held by a strictly more mobile phase.
    #[inline]
    pub fn is_valid_move(&self, x: i32, y: i32, mover: Phase) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        match self.phase_at(x, y) {
            None => true,
            Some(occupant) => mover.can_displace(occupant),
        }
    }

    /// Store the new velocity on the particle being updated.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(p) = self.grid.get_mut(self.x, self.y) {
            p.velocity = velocity;
        }
    }

    /// Trace the current particle by (dx, dy) and mark it updated if it
    /// left its cell. The context position follows the particle.
    pub fn trace_self(&mut self, dx: i32, dy: i32, hint: i32, profile: &TraceProfile) -> TraceOutcome {
        let out = movement::trace(self.grid, self.table, self.x, self.y, dx, dy, hint, profile);
        let moved = out.moved_from(self.x, self.y);

        self.counters.swaps += out.swaps;
        if moved {
            self.counters.moved += 1;
        }
        if let Some(p) = self.grid.get_mut(out.x, out.y) {
            p.stuck = !moved;
            if moved {
                p.updated = true;
            }
        }
        self.x = out.x;
        self.y = out.y;
        out
    }

    /// New particle flagged as processed for this tick.
    #[inline]
    pub fn spawn_fresh(&mut self, material: Material) -> Particle {
        Particle::fresh(material, self.table.get(material), self.rng)
    }

    /// Replace whatever sits at (x, y) with a fresh particle.
    pub fn replace(&mut self, x: i32, y: i32, material: Material) {
        if !self.grid.in_bounds(x, y) {
            return;
        }
        let p = self.spawn_fresh(material);
        self.grid.set(x, y, Some(p));
    }

    /// Put a fresh particle into an empty cell, respecting the particle
    /// budget. Returns whether it was placed.
    pub fn emit(&mut self, x: i32, y: i32, material: Material) -> bool {
        if !self.grid.is_empty(x, y) {
            return false;
        }
        if self.grid.particle_count() >= self.particle_limit {
            log::debug!("particle limit {} reached, dropping {:?} emission", self.particle_limit, material);
            return false;
        }
        let p = self.spawn_fresh(material);
        if self.grid.insert(x, y, p).is_err() {
            return false;
        }
        self.counters.emitted += 1;
        true
    }

    /// Remove the current particle, or turn it into its successor material.
    pub fn expire(&mut self, material: Material) {
        self.counters.expired += 1;
        match self.props(material).expires_into {
            Some(next) => self.replace(self.x, self.y, next),
            None => {
                self.grid.take(self.x, self.y);
            }
        }
    }
}

/// Behavior trait - each phase implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// ±1 lateral direction for a horizontal velocity; zero picks a random side.
#[inline]
pub fn lateral_dir(vx: f32, rng: &mut dyn RandomSource) -> i32 {
    if vx > 0.0 {
        1
    } else if vx < 0.0 {
        -1
    } else {
        rng.sign()
    }
}

/// Behavior registry - dispatch by phase
pub struct BehaviorRegistry {
    solid: SolidBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
    stuck: StuckBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            solid: SolidBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
            stuck: StuckBehavior::new(),
        }
    }

    pub fn update(&self, phase: Phase, ctx: &mut UpdateContext) {
        match phase {
            Phase::SolidStuck => self.stuck.update(ctx),
            Phase::Solid => self.solid.update(ctx),
            Phase::Liquid => self.liquid.update(ctx),
            Phase::Gas => self.gas.update(ctx),
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
