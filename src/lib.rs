//! PixelPhysics Engine - falling-sand simulation core in WASM
//!
//! Architecture:
//! - util/        - Errors, randomness, logging
//! - domain/      - Materials, particles, config
//! - spatial/     - Grid storage
//! - systems/     - Movement tracing and per-phase behaviors
//! - simulation/  - Tick driver, commands and the JS facade

pub mod util;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps short internal paths working)
pub use spatial::grid;
pub use systems::behaviors;
pub use systems::movement;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    util::logging::install();
    log::info!("PixelPhysics engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Material, MaterialTable, Phase, SimConfig};
pub use simulation::{Simulation, SpawnReport, TickStats, World};
pub use util::{RandomSource, SimError, SimResult};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { domain::materials::MAT_EMPTY }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { Material::Smoke.id() }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn mat_lava() -> u8 { Material::Lava.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn mat_oil() -> u8 { Material::Oil.id() }
