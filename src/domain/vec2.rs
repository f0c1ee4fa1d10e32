/// Particle velocity in cells per tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Whole-cell offset this velocity asks for. Truncates toward zero, so
    /// anything slower than one cell per tick requests no movement.
    #[inline]
    pub fn cell_offset(&self) -> (i32, i32) {
        (to_cells(self.x), to_cells(self.y))
    }
}

/// -1.0 for negative components, +1.0 otherwise (zero counts as positive).
#[inline]
pub fn dir_of(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

#[inline]
pub fn to_cells(v: f32) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    v.trunc() as i32
}

/// `f32::clamp` that tolerates `lo > hi` (collapses to `lo`).
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo
    } else if v > hi {
        hi.max(lo)
    } else {
        v
    }
}
