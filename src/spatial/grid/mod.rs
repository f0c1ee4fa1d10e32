//! Grid - dense W×H array of owned particles
//!
//! Each slot is `Option<Particle>`; a particle lives in exactly one slot and
//! is moved, never cloned, when it changes cells. All coordinate access is
//! bounds-checked: reads outside the grid see an empty cell and writes
//! outside the grid are rejected.

use crate::domain::particle::Particle;
use crate::util::{SimError, SimResult};

mod indexing;
mod cells;
mod moves;
mod queries;

pub struct Grid {
    width: i32,
    height: i32,
    size: usize,
    cells: Vec<Option<Particle>>,

    // Occupancy bookkeeping, kept in sync by every write
    count: usize,
    column_non_empty: Vec<u32>,
}

impl Grid {
    /// Allocate an empty grid. Sizes that overflow the index space or that
    /// cannot be allocated are rejected.
    pub fn new(width: u32, height: u32) -> SimResult<Self> {
        let too_large = || SimError::GridTooLarge { width, height };

        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let size = (width as usize).checked_mul(height as usize).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large())?;
        cells.resize_with(size, || None);

        let mut column_non_empty = Vec::new();
        column_non_empty.try_reserve_exact(width as usize).map_err(|_| too_large())?;
        column_non_empty.resize(width as usize, 0);

        Ok(Self {
            width: w,
            height: h,
            size,
            cells,
            count: 0,
            column_non_empty,
        })
    }

    // === Sparse helpers ===
    fn mark_cell_non_empty(&mut self, x: i32) {
        self.count += 1;
        if let Some(c) = self.column_non_empty.get_mut(x as usize) {
            *c = c.saturating_add(1);
        }
    }

    fn mark_cell_empty(&mut self, x: i32) {
        self.count = self.count.saturating_sub(1);
        if let Some(c) = self.column_non_empty.get_mut(x as usize) {
            *c = c.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests;
