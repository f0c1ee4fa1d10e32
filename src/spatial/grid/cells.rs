use super::*;

impl Grid {
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Particle> {
        let idx = self.index(x, y)?;
        self.cells[idx].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Particle> {
        let idx = self.index(x, y)?;
        self.cells[idx].as_mut()
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Option<&Particle> {
        self.cells.get(idx)?.as_ref()
    }

    /// In bounds and unoccupied. Cells outside the grid are never empty.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].is_none(),
            None => false,
        }
    }

    /// Write a slot, dropping whatever was there. Returns false (and drops
    /// `value`) when the coordinates are outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: Option<Particle>) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if self.cells[idx].take().is_some() {
            self.mark_cell_empty(x);
        }
        if value.is_some() {
            self.mark_cell_non_empty(x);
        }
        self.cells[idx] = value;
        true
    }

    /// Place a particle into an empty cell. Hands it back if the cell is
    /// occupied or out of bounds.
    pub fn insert(&mut self, x: i32, y: i32, particle: Particle) -> Result<(), Particle> {
        match self.index(x, y) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(particle);
                self.mark_cell_non_empty(x);
                Ok(())
            }
            _ => Err(particle),
        }
    }

    /// Remove and return the particle at (x, y).
    pub fn take(&mut self, x: i32, y: i32) -> Option<Particle> {
        let idx = self.index(x, y)?;
        let taken = self.cells[idx].take();
        if taken.is_some() {
            self.mark_cell_empty(x);
        }
        taken
    }

    // === Bulk ===
    pub fn clear(&mut self) {
        for slot in self.cells.iter_mut() {
            *slot = None;
        }
        self.count = 0;
        self.column_non_empty.fill(0);
    }

    pub fn reset_updated(&mut self) {
        for p in self.cells.iter_mut().flatten() {
            p.updated = false;
        }
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn column_is_empty(&self, x: i32) -> bool {
        self.column_non_empty
            .get(x as usize)
            .map_or(true, |&c| c == 0)
    }

    /// Row-major view of every slot, for render extraction.
    #[inline]
    pub fn cells(&self) -> &[Option<Particle>] {
        &self.cells
    }
}
