use std::sync::Arc;

use crate::behaviors::{BehaviorRegistry, StepCounters};
use crate::domain::color::BG_COLOR;
use crate::domain::config::SimConfig;
use crate::domain::materials::{MaterialTable, MAT_EMPTY};
use crate::grid::Grid;
use crate::util::random::seeded;
use crate::util::SimResult;

use super::perf_stats::TickStats;
use super::RenderBuffers;
use super::Simulation;

pub(super) fn create_simulation(
    width: u32,
    height: u32,
    config: SimConfig,
    table: Arc<MaterialTable>,
) -> SimResult<Simulation> {
    let grid = Grid::new(width, height).inspect_err(|e| log::warn!("world not created: {}", e))?;
    let size = grid.size();
    log::info!("creating {}x{} world (seed {})", width, height, config.seed);

    Ok(Simulation {
        table,
        rng: Box::new(seeded(config.seed)),
        config,
        grid,
        behaviors: BehaviorRegistry::new(),
        frame: 0,
        counters: StepCounters::default(),
        stats: TickStats::default(),

        render: RenderBuffers {
            colors: vec![BG_COLOR; size],
            materials: vec![MAT_EMPTY; size],
        },
    })
}
