use super::*;
use crate::domain::materials::Material;

/// 8-neighborhood, row by row from the top-left.
pub(crate) const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

impl Grid {
    #[inline]
    pub fn material_at(&self, x: i32, y: i32) -> Option<Material> {
        self.get(x, y).map(|p| p.material)
    }

    /// Sum of the horizontal velocity of the 8 neighbors of (x, y) made of
    /// `material`. Neighbors outside the grid contribute nothing.
    pub fn surrounding_flow(&self, x: i32, y: i32, material: Material) -> f32 {
        NEIGHBORS_8
            .iter()
            .filter_map(|&(dx, dy)| self.get(x + dx, y + dy))
            .filter(|p| p.material == material)
            .map(|p| p.velocity.x)
            .sum()
    }

    /// Occupied cells, for invariants and debugging.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
