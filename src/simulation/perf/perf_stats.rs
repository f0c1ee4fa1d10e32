use wasm_bindgen::prelude::*;

use crate::behaviors::StepCounters;

/// Snapshot of the last tick for the host UI
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) frame: u64,
    pub(super) step_ms: f64,
    pub(super) particle_count: u32,
    pub(super) processed: u32,
    pub(super) moved: u32,
    pub(super) swaps: u32,
    pub(super) ignitions: u32,
    pub(super) extinguished: u32,
    pub(super) expired: u32,
    pub(super) emitted: u32,
}

impl TickStats {
    pub(super) fn record(frame: u64, step_ms: f64, particle_count: usize, c: &StepCounters) -> Self {
        Self {
            frame,
            step_ms,
            particle_count: particle_count.min(u32::MAX as usize) as u32,
            processed: c.processed,
            moved: c.moved,
            swaps: c.swaps,
            ignitions: c.ignitions,
            extinguished: c.extinguished,
            expired: c.expired,
            emitted: c.emitted,
        }
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn processed(&self) -> u32 { self.processed }
    #[wasm_bindgen(getter)]
    pub fn moved(&self) -> u32 { self.moved }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn ignitions(&self) -> u32 { self.ignitions }
    #[wasm_bindgen(getter)]
    pub fn extinguished(&self) -> u32 { self.extinguished }
    #[wasm_bindgen(getter)]
    pub fn expired(&self) -> u32 { self.expired }
    #[wasm_bindgen(getter)]
    pub fn emitted(&self) -> u32 { self.emitted }
}
