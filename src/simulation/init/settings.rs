use std::sync::Arc;

use crate::domain::config::SimConfig;
use crate::domain::materials::MaterialTable;
use crate::util::random::seeded;
use crate::util::{RandomSource, SimResult};

use super::Simulation;

/// Apply a validated config. A new seed restarts the random stream.
pub(super) fn set_config(sim: &mut Simulation, config: SimConfig) -> SimResult<()> {
    config.validate()?;
    if config.seed != sim.config.seed {
        sim.rng = Box::new(seeded(config.seed));
    }
    sim.config = config;
    log::info!("config updated: {}", sim.config.to_json());
    Ok(())
}

pub(super) fn load_config_json(sim: &mut Simulation, json: &str) -> SimResult<()> {
    let config = SimConfig::from_json(json)?;
    set_config(sim, config)
}

pub(super) fn load_materials_json(sim: &mut Simulation, json: &str) -> SimResult<()> {
    let table = MaterialTable::from_json(json)?;
    sim.table = Arc::new(table);
    super::commands::clear(sim);
    Ok(())
}

pub(super) fn set_random_source(sim: &mut Simulation, rng: Box<dyn RandomSource>) {
    sim.rng = rng;
}
