use super::*;

impl Grid {
    /// Transfer the particle at `from` into the empty cell `to`.
    /// Nothing changes unless both cells are in bounds, `from` is occupied
    /// and `to` is empty.
    pub fn move_particle(&mut self, fx: i32, fy: i32, tx: i32, ty: i32) -> bool {
        let (Some(from), Some(to)) = (self.index(fx, fy), self.index(tx, ty)) else {
            return false;
        };
        if from == to || self.cells[from].is_none() || self.cells[to].is_some() {
            return false;
        }
        self.cells.swap(from, to);
        self.shift_column_count(fx, tx);
        true
    }

    /// Exchange the contents of two cells (either may be empty).
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let (Some(a), Some(b)) = (self.index(x1, y1), self.index(x2, y2)) else {
            return false;
        };
        if a == b {
            return true;
        }
        let a_full = self.cells[a].is_some();
        let b_full = self.cells[b].is_some();
        self.cells.swap(a, b);
        match (a_full, b_full) {
            (true, false) => self.shift_column_count(x1, x2),
            (false, true) => self.shift_column_count(x2, x1),
            _ => {}
        }
        true
    }

    fn shift_column_count(&mut self, from_x: i32, to_x: i32) {
        if from_x == to_x {
            return;
        }
        if let Some(c) = self.column_non_empty.get_mut(from_x as usize) {
            *c = c.saturating_sub(1);
        }
        if let Some(c) = self.column_non_empty.get_mut(to_x as usize) {
            *c = c.saturating_add(1);
        }
    }
}
