use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> i32 { self.width }

    #[inline]
    pub fn height(&self) -> i32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    // === Index conversion ===
    /// Linear index `y * W + x`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (i32, i32) {
        let w = self.width.max(1) as usize;
        ((idx % w) as i32, (idx / w) as i32)
    }

    /// Bottom row, the floor particles rest on.
    #[inline]
    pub fn floor_y(&self) -> i32 {
        self.height - 1
    }
}
