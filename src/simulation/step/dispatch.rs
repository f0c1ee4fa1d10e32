use crate::behaviors::UpdateContext;

use super::Simulation;

/// Run the phase rule for the particle at (x, y), unless the cell is empty
/// or its particle was already handled this tick.
pub(super) fn update_particle(sim: &mut Simulation, x: i32, y: i32, dt: f32) {
    let Some(p) = sim.grid.get(x, y) else { return };
    if p.updated {
        return;
    }
    let phase = sim.table.phase(p.material);
    let particle_limit = sim.config.limit_for(sim.grid.size());
    sim.counters.processed += 1;

    let mut ctx = UpdateContext {
        grid: &mut sim.grid,
        table: &sim.table,
        config: &sim.config,
        rng: &mut *sim.rng,
        counters: &mut sim.counters,
        x,
        y,
        dt,
        particle_limit,
    };
    sim.behaviors.update(phase, &mut ctx);
}
