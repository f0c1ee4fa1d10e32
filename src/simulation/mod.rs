//! Simulation - owns the grid and drives one tick at a time
//!
//! Orchestration only: movement lives in `systems::movement`, per-phase
//! rules in `systems::behaviors`. This module holds the state, the scan
//! order and the external commands (spawn, query, clear, config loads).

use std::sync::Arc;

use crate::behaviors::{BehaviorRegistry, StepCounters};
use crate::domain::config::SimConfig;
use crate::domain::materials::{Material, MaterialTable};
use crate::domain::particle::ParticleSnapshot;
use crate::grid::Grid;
use crate::util::{RandomSource, SimResult};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/dispatch.rs"]
mod dispatch;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::SpawnReport;
pub use facade::World;
pub use perf_stats::TickStats;
pub use step::scan_goes_right;

use perf_timer::PerfTimer;

/// Host-readable copies of the grid, refreshed by `extract_colors`
pub(crate) struct RenderBuffers {
    pub(crate) colors: Vec<u32>,
    pub(crate) materials: Vec<u8>,
}

/// The simulation world
pub struct Simulation {
    table: Arc<MaterialTable>,
    config: SimConfig,
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: Box<dyn RandomSource>,

    // State
    frame: u64,
    counters: StepCounters,
    stats: TickStats,

    render: RenderBuffers,
}

impl Simulation {
    /// Create a world with the default config and the built-in materials.
    /// Fails with `GridTooLarge` when the grid cannot be allocated.
    pub fn new(width: u32, height: u32) -> SimResult<Self> {
        init::create_simulation(width, height, SimConfig::default(), Arc::new(MaterialTable::builtin()))
    }

    pub fn with_config(width: u32, height: u32, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        init::create_simulation(width, height, config, Arc::new(MaterialTable::builtin()))
    }

    pub fn width(&self) -> u32 { self.grid.width() as u32 }

    pub fn height(&self) -> u32 { self.grid.height() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn materials(&self) -> &MaterialTable { &self.table }

    // === Settings ===

    pub fn set_config(&mut self, config: SimConfig) -> SimResult<()> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> SimResult<()> {
        settings::load_config_json(self, json)
    }

    /// Swap in a material bundle. Clears the grid, since live particles
    /// were created under the old properties.
    pub fn load_materials_json(&mut self, json: &str) -> SimResult<()> {
        settings::load_materials_json(self, json)
    }

    pub fn materials_manifest_json(&self) -> String {
        self.table.manifest_json()
    }

    /// Replace the random source, e.g. with a seeded generator in tests
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        settings::set_random_source(self, rng);
    }

    // === Commands ===

    /// Fill a line of cells between two points with `material`. Stuck
    /// materials are stamped as a disc along the line. Occupied and
    /// out-of-bounds cells are skipped.
    pub fn spawn(&mut self, material: Material, from: (i32, i32), to: (i32, i32)) -> SimResult<SpawnReport> {
        commands::spawn(self, material, from, to)
    }

    /// Same as `spawn`, addressed by material id.
    pub fn spawn_id(&mut self, material_id: u8, from: (i32, i32), to: (i32, i32)) -> SimResult<SpawnReport> {
        let material = Material::from_id(material_id)?;
        commands::spawn(self, material, from, to)
    }

    pub fn query(&self, x: i32, y: i32) -> Option<ParticleSnapshot> {
        commands::query(self, x, y)
    }

    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        commands::remove_particle(self, x, y)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Summed horizontal velocity of the 8 neighbors made of `material`
    pub fn surrounding_flow(&self, x: i32, y: i32, material: Material) -> f32 {
        self.grid.surrounding_flow(x, y, material)
    }

    // === Stepping ===

    /// Advance one tick of `dt` seconds
    pub fn tick(&mut self, dt: f32) -> SimResult<()> {
        step::tick(self, dt)
    }

    /// Advance one tick of the configured fixed step
    pub fn step(&mut self) {
        step::step(self)
    }

    /// Event tallies of the last tick
    pub fn last_counters(&self) -> &StepCounters {
        &self.counters
    }

    pub fn tick_stats(&self) -> TickStats {
        self.stats.clone()
    }

    // === Rendering ===

    /// Refresh the packed color and material-id buffers
    pub fn extract_colors(&mut self) {
        render_extract::extract_colors(self);
    }

    pub fn colors(&self) -> &[u32] {
        &self.render.colors
    }

    pub fn material_ids(&self) -> &[u8] {
        &self.render.materials
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
