//! GasBehavior - smoke
//!
//! Gases rise against gravity with a little horizontal jitter, slide along
//! ceilings in their current direction and turn around when blocked.
//! Decaying gases thin out and vanish when their life runs out.

use super::combustion::thin_out;
use super::{Behavior, UpdateContext};
use crate::domain::materials::Phase;
use crate::domain::vec2::{clamp, to_cells, Vec2};
use crate::movement::TraceProfile;

/// Buoyancy as a multiple of gravity (negative = upwards)
const GAS_GRAVITY: f32 = -1.5;
/// Horizontal jitter per second
const JITTER: f32 = 0.1 * 0.5;
/// Horizontal speed multiplier while sliding along a ceiling
const SLIDE_BOOST: f32 = 1.5;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Lose life on a decay roll. Returns false if the particle expired.
    fn decay(&self, ctx: &mut UpdateContext) -> bool {
        let (x, y) = (ctx.x, ctx.y);
        let Some(p) = ctx.grid.get(x, y) else { return false };
        let material = p.material;
        if !ctx.props(material).decaying || !ctx.rng.chance(ctx.config.decay_chance) {
            return true;
        }

        let dt = ctx.dt;
        let Some(p) = ctx.grid.get_mut(x, y) else { return false };
        p.life -= dt;
        p.color = thin_out(p.color, p.life);
        if p.life <= 0.0 {
            ctx.expire(material);
            return false;
        }
        true
    }

    /// Pick the target offset by priority and adjust the stored velocity.
    fn choose_target(&self, ctx: &mut UpdateContext, v: &mut Vec2, max_x: f32) -> (i32, i32) {
        let (x, y) = (ctx.x, ctx.y);
        let vy = to_cells(v.y);
        let vx = to_cells(v.x);

        // Straight up, with some sideways wobble
        if ctx.grid.is_empty(x, y - 1) {
            return (ctx.rng.sign(), vy);
        }

        let up_right = ctx.is_valid_move(x + 1, y - 1, Phase::Gas);
        let right = ctx.is_valid_move(x + 1, y, Phase::Gas);
        let up_left = ctx.is_valid_move(x - 1, y - 1, Phase::Gas);
        let left = ctx.is_valid_move(x - 1, y, Phase::Gas);

        if vx > 0 {
            if up_right {
                (vx, vy)
            } else if right {
                v.y /= 2.0;
                v.x = clamp(v.x * SLIDE_BOOST, 0.0, max_x);
                ((vx as f32 * SLIDE_BOOST) as i32, 0)
            } else if up_left {
                v.x = -1.0;
                (-1, vy)
            } else if left {
                v.x = if ctx.rng.coin() { -2.0 } else { -1.0 };
                v.y /= 2.0;
                (v.x as i32, 0)
            } else {
                (0, 0)
            }
        } else {
            let vx = if vx == 0 { -1 } else { vx };
            if up_left {
                (vx, vy)
            } else if left {
                v.y /= 2.0;
                v.x = clamp(v.x * SLIDE_BOOST, -max_x, 0.0);
                ((vx as f32 * SLIDE_BOOST) as i32, 0)
            } else if up_right {
                v.x = 1.0;
                (1, vy)
            } else if right {
                v.x = if ctx.rng.coin() { 1.0 } else { 2.0 };
                v.y /= 2.0;
                (v.x as i32, 0)
            } else {
                (0, 0)
            }
        }
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !self.decay(ctx) {
            return;
        }

        let Some(p) = ctx.grid.get(ctx.x, ctx.y) else { return };
        let props = ctx.props(p.material);
        let mut v = p.velocity;
        let dt = ctx.dt;

        v.y = clamp(v.y + GAS_GRAVITY * ctx.config.gravity * dt, -props.max_y, props.max_y);
        let wobble = if ctx.rng.coin() { JITTER } else { -JITTER };
        v.x = clamp(v.x + wobble * dt, -props.max_x, props.max_x);

        let (dx, dy) = self.choose_target(ctx, &mut v, props.max_x);
        ctx.set_velocity(v);

        let hint = if dx != 0 { dx.signum() } else if v.x < 0.0 { -1 } else { 1 };
        ctx.trace_self(dx, dy, hint, &TraceProfile::GAS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::Material;
    use crate::systems::behaviors::test_support::Harness;

    #[test]
    fn rises_over_time() {
        let mut h = Harness::new(5, 40, 4);
        h.put(2, 39, Material::Smoke);
        h.config.decay_chance = 0.0;

        let (mut x, mut y) = (2, 39);
        for _ in 0..30 {
            h.run(&GasBehavior::new(), x, y);
            let (nx, ny) = h
                .grid
                .cells()
                .iter()
                .position(|c| c.is_some())
                .map(|i| h.grid.coords(i))
                .unwrap();
            h.grid.reset_updated();
            x = nx;
            y = ny;
        }
        assert!(y < 39, "smoke stayed at y={}", y);
        assert_eq!(h.grid.particle_count(), 1);
    }

    #[test]
    fn expires_exactly_once() {
        let mut h = Harness::new(3, 3, 4);
        h.config.decay_chance = 1.0;
        h.put(1, 1, Material::Smoke);
        h.grid.get_mut(1, 1).unwrap().life = 0.01;

        h.run(&GasBehavior::new(), 1, 1);
        assert_eq!(h.grid.particle_count(), 0);
        assert_eq!(h.counters.expired, 1);

        // nothing left to expire
        h.run(&GasBehavior::new(), 1, 1);
        assert_eq!(h.counters.expired, 1);
    }

    #[test]
    fn life_only_decreases_and_fades_alpha() {
        let mut h = Harness::new(3, 3, 4);
        h.config.decay_chance = 1.0;
        h.put(1, 1, Material::Smoke);
        h.grid.get_mut(1, 1).unwrap().life = 1.5;
        // box it in so it stays at (1, 1)
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)] {
            h.put(x, y, Material::Stone);
        }

        let mut last = 1.5;
        for _ in 0..40 {
            h.run(&GasBehavior::new(), 1, 1);
            let Some(p) = h.grid.get(1, 1) else { break };
            assert!(p.life < last);
            last = p.life;
            if p.life < 0.95 {
                assert!(p.color.a < 255);
            }
        }
    }

    #[test]
    fn slides_along_a_ceiling() {
        let mut h = Harness::new(6, 2, 4);
        h.config.decay_chance = 0.0;
        for x in 0..6 {
            h.put(x, 0, Material::Stone);
        }
        h.put(2, 1, Material::Smoke);
        h.grid.get_mut(2, 1).unwrap().velocity = Vec2::new(2.5, 0.0);
        h.run(&GasBehavior::new(), 2, 1);

        assert!(h.grid.get(2, 1).is_none());
        assert_eq!(h.grid.material_at(5, 1), Some(Material::Smoke));
    }
}
