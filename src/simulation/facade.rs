use wasm_bindgen::prelude::*;

use super::perf_stats::TickStats;
use super::Simulation;
use crate::domain::config::SimConfig;
use crate::domain::materials::{Material, MAT_EMPTY};
use crate::util::SimError;

fn to_js(e: SimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = Simulation::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, config_json: String) -> Result<World, JsValue> {
        let config = SimConfig::from_json(&config_json).map_err(to_js)?;
        let core = Simulation::with_config(width, height, config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Step the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.tick(dt).map_err(to_js)
    }

    /// Step the simulation by the configured fixed step
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Draw a line of `material_id` from (x0, y0) to (x1, y1).
    /// Returns the number of particles placed.
    pub fn spawn(&mut self, material_id: u8, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<u32, JsValue> {
        let report = self.core.spawn_id(material_id, (x0, y0), (x1, y1)).map_err(to_js)?;
        Ok(report.placed)
    }

    /// Material id at (x, y), 0 when empty or out of bounds
    pub fn query_material(&self, x: i32, y: i32) -> u8 {
        self.core.query(x, y).map_or(MAT_EMPTY, |s| s.material.id())
    }

    /// Packed ABGR color at (x, y), 0 when empty or out of bounds
    pub fn query_color(&self, x: i32, y: i32) -> u32 {
        self.core.query(x, y).map_or(0, |s| s.color.to_abgr())
    }

    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        self.core.remove_particle(x, y)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Replace the material table. Clears the grid.
    pub fn load_materials(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_materials_json(&json).map_err(to_js)
    }

    pub fn materials_manifest(&self) -> String {
        self.core.materials_manifest_json()
    }

    pub fn surrounding_flow(&self, x: i32, y: i32, material_id: u8) -> Result<f32, JsValue> {
        let material = Material::from_id(material_id).map_err(to_js)?;
        Ok(self.core.surrounding_flow(x, y, material))
    }

    /// Counters and timing of the last tick
    pub fn tick_stats(&self) -> TickStats {
        self.core.tick_stats()
    }

    // === RENDERING ===

    /// Refresh the color and material buffers from the grid
    pub fn extract_colors(&mut self) {
        self.core.extract_colors();
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors().as_ptr()
    }

    /// Get pointer to material id array
    pub fn materials_ptr(&self) -> *const u8 {
        self.core.material_ids().as_ptr()
    }

    /// Number of cells, i.e. elements in each render buffer
    pub fn cells_len(&self) -> usize {
        self.core.colors().len()
    }
}
