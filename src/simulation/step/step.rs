use crate::behaviors::StepCounters;
use crate::util::{SimError, SimResult};

use super::dispatch::update_particle;
use super::perf_stats::TickStats;
use super::{PerfTimer, Simulation};

/// Column scan direction for a frame: left to right on even frames, right
/// to left on odd ones, so no horizontal direction is favored over time.
#[inline]
pub fn scan_goes_right(frame: u64) -> bool {
    frame & 1 == 0
}

pub(super) fn step(sim: &mut Simulation) {
    let dt = sim.config.step_seconds;
    // step_seconds is validated on every config change
    if let Err(e) = tick(sim, dt) {
        log::warn!("fixed step skipped: {}", e);
    }
}

pub(super) fn tick(sim: &mut Simulation, dt: f32) -> SimResult<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimeStep(dt));
    }

    let timer = PerfTimer::start();
    sim.counters = StepCounters::default();

    let width = sim.grid.width();
    let height = sim.grid.height();
    let go_right = scan_goes_right(sim.frame);

    for i in 0..width {
        let x = if go_right { i } else { width - 1 - i };
        if sim.grid.column_is_empty(x) {
            continue;
        }
        // Bottom to top so falling particles never get processed twice
        for y in (0..height).rev() {
            update_particle(sim, x, y, dt);
        }
    }

    sim.grid.reset_updated();
    sim.stats = TickStats::record(sim.frame, timer.elapsed_ms(), sim.grid.particle_count(), &sim.counters);
    sim.frame += 1;
    Ok(())
}
