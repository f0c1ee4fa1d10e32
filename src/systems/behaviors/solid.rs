//! SolidBehavior - loose solids (sand)
//!
//! Falls straight down while it can, rolls off diagonally when resting on
//! something, and only slides sideways when it still carries a full cell
//! of horizontal speed.

use super::{lateral_dir, Behavior, UpdateContext};
use crate::domain::materials::Phase;
use crate::domain::vec2::{clamp, dir_of, to_cells};
use crate::movement::TraceProfile;

/// Horizontal boost per second while rolling off a pile
const ROLL_ACCEL: f32 = 2.0;
/// Vertical damping when both diagonals are open, keeps piles from growing
/// tall spikes
const TIP_DAMPING: f32 = 0.8;

pub struct SolidBehavior;

impl SolidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SolidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let (x, y) = (ctx.x, ctx.y);
        let Some(p) = ctx.grid.get(x, y) else { return };
        let props = ctx.props(p.material);
        let mut v = p.velocity;

        // Resting on the floor
        if y >= ctx.grid.floor_y() {
            if let Some(p) = ctx.grid.get_mut(x, y) {
                p.stuck = true;
            }
            return;
        }

        let dt = ctx.dt;
        let (max_x, max_y) = (props.max_x, props.max_y);

        let below = ctx.is_valid_move(x, y + 1, Phase::Solid);
        let down_left = ctx.is_valid_move(x - 1, y + 1, Phase::Solid);
        let down_right = ctx.is_valid_move(x + 1, y + 1, Phase::Solid);

        let (dx, dy, hint) = if below {
            // Drag scales with the step so fast horizontal motion dies off quickly
            v.x = clamp(v.x * (dt * 5.0), -max_x, max_x);
            v.y = clamp(v.y + ctx.config.gravity * dt, -max_y, max_y);
            let hint = lateral_dir(v.x, ctx.rng);
            (to_cells(v.x), to_cells(v.y), hint)
        } else if down_left || down_right {
            let hint = if down_left && down_right {
                v.y *= TIP_DAMPING;
                v.x = clamp(v.x + ROLL_ACCEL * dt * dir_of(v.x), -max_x, max_x);
                dir_of(v.x) as i32
            } else if down_right {
                v.x = clamp(v.x + ROLL_ACCEL * dt, 0.0, max_x);
                1
            } else {
                v.x = clamp(v.x - ROLL_ACCEL * dt, -max_x, 0.0);
                -1
            };
            // Always ask for at least one cell down so the trace deflects
            // onto the open diagonal
            (to_cells(v.x), to_cells(v.y).max(1), hint)
        } else {
            let side = dir_of(v.x) as i32;
            if v.x.abs() >= 1.0 && ctx.is_valid_move(x + side, y, Phase::Solid) {
                (to_cells(v.x), 0, side)
            } else {
                v.x = 0.0;
                (0, 0, 1)
            }
        };

        ctx.set_velocity(v);
        ctx.trace_self(dx, dy, hint, &TraceProfile::SOLID);
    }
}
