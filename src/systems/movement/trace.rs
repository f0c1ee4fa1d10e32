use crate::domain::materials::MaterialTable;
use crate::domain::vec2::Vec2;
use crate::grid::Grid;

use super::types::{TraceOutcome, TraceProfile};

/// Vertical kick given to a particle pushed aside by a swap
const DISPLACED_VY: f32 = -0.1;

enum Step {
    Moved,
    Swapped,
    Blocked,
    OutOfBounds,
}

/// Walk the particle at (x0, y0) towards (x0 + dx, y0 + dy) one cell at a
/// time along a Bresenham line.
///
/// Empty cells are entered, cells held by a strictly more mobile phase are
/// swapped with, and anything else triggers a single diagonal deflection
/// on the other axis. The walk stops at the target, at the first
/// unrecoverable block, at the grid edge, or after `profile.max_steps`
/// iterations. The returned position is always inside the grid.
///
/// `lateral_hint` (±1) picks the horizontal side for deflections and swap
/// kicks when `dx` is zero.
#[allow(clippy::too_many_arguments)]
pub fn trace(
    grid: &mut Grid,
    table: &MaterialTable,
    x0: i32,
    y0: i32,
    dx: i32,
    dy: i32,
    lateral_hint: i32,
    profile: &TraceProfile,
) -> TraceOutcome {
    let mut out = TraceOutcome::stay(x0, y0);
    if grid.get(x0, y0).is_none() {
        return out;
    }

    let tx = x0.saturating_add(dx);
    let ty = y0.saturating_add(dy);
    let hint = if lateral_hint < 0 { -1 } else { 1 };
    let sx = if dx != 0 { dx.signum() } else { hint };
    let sy = if dy != 0 { dy.signum() } else { profile.rest_dy };

    let adx = dx.saturating_abs();
    let ady = -dy.saturating_abs();
    let mut err = adx.saturating_add(ady);

    let mut tracer = Tracer { grid, table, profile, hint, out: &mut out };

    while tracer.out.iterations < profile.max_steps {
        if tracer.out.x == tx && tracer.out.y == ty {
            break;
        }
        tracer.out.iterations += 1;

        let e2 = err.saturating_mul(2);

        if e2 >= ady {
            err = err.saturating_add(ady);
            let (px, py) = (tracer.out.x, tracer.out.y);
            match tracer.advance(px + sx, py) {
                Step::Moved | Step::Swapped => {}
                Step::Blocked => {
                    // Diagonal instead; consumes the y step
                    if tracer.advance_diagonal(sx, sy) {
                        err = err.saturating_add(adx);
                    } else {
                        break;
                    }
                }
                Step::OutOfBounds => break,
            }
        }

        if e2 <= adx {
            err = err.saturating_add(adx);
            let (px, py) = (tracer.out.x, tracer.out.y);
            match tracer.advance(px, py + sy) {
                Step::Moved | Step::Swapped => {}
                Step::Blocked => {
                    // Diagonal instead; consumes the x step
                    if tracer.advance_diagonal(sx, sy) {
                        err = err.saturating_add(ady);
                    } else if profile.lateral_slip && tracer.advance_lateral(sx) {
                        err = err.saturating_add(ady);
                    } else {
                        break;
                    }
                }
                Step::OutOfBounds => break,
            }
        }
    }

    out
}

struct Tracer<'a> {
    grid: &'a mut Grid,
    table: &'a MaterialTable,
    profile: &'a TraceProfile,
    hint: i32,
    out: &'a mut TraceOutcome,
}

impl Tracer<'_> {
    fn advance_diagonal(&mut self, sx: i32, sy: i32) -> bool {
        let (px, py) = (self.out.x, self.out.y);
        matches!(self.advance(px + sx, py + sy), Step::Moved | Step::Swapped)
    }

    fn advance_lateral(&mut self, sx: i32) -> bool {
        let (px, py) = (self.out.x, self.out.y);
        matches!(self.advance(px + sx, py), Step::Moved | Step::Swapped)
    }

    /// Try to carry the particle from its current cell into (nx, ny).
    fn advance(&mut self, nx: i32, ny: i32) -> Step {
        let (px, py) = (self.out.x, self.out.y);
        if !self.grid.in_bounds(nx, ny) {
            return Step::OutOfBounds;
        }

        let occupant = self.grid.get(nx, ny).map(|p| self.table.phase(p.material));
        let step = match occupant {
            None => {
                if !self.grid.move_particle(px, py, nx, ny) {
                    return Step::Blocked;
                }
                Step::Moved
            }
            Some(phase) if self.profile.mover.can_displace(phase) => {
                if !self.grid.swap(px, py, nx, ny) {
                    return Step::Blocked;
                }
                self.kick_displaced(px, py, nx);
                self.out.swaps += 1;
                Step::Swapped
            }
            Some(_) => return Step::Blocked,
        };

        self.out.x = nx;
        self.out.y = ny;
        self.out.steps += 1;
        step
    }

    /// The particle pushed back into (px, py) is done for this tick and gets
    /// flung sideways in the mover's direction at its own speed cap.
    fn kick_displaced(&mut self, px: i32, py: i32, nx: i32) {
        let dir = match nx.cmp(&px) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => -1.0,
            std::cmp::Ordering::Equal => self.hint as f32,
        };
        let table = self.table;
        if let Some(displaced) = self.grid.get_mut(px, py) {
            let max_x = table.get(displaced.material).max_x;
            displaced.updated = true;
            displaced.velocity = Vec2::new(dir * max_x, DISPLACED_VY);
        }
    }
}
