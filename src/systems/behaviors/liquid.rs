//! LiquidBehavior - water, oil and lava
//!
//! Liquids fall with damped gravity and spread sideways when they land.
//! Lava additionally sets fire to what it touches and trades places with
//! water by destroying one of the two.

use super::combustion::{find_ignitable, ignite};
use super::{lateral_dir, Behavior, UpdateContext};
use crate::domain::materials::{Material, Phase};
use crate::domain::vec2::{clamp, dir_of, to_cells};
use crate::movement::TraceProfile;

/// Fraction of gravity a liquid feels
const LIQUID_GRAVITY: f32 = 0.8;
/// Vertical speed lost per second while resting on something
const LANDING_BRAKE: f32 = 10.0;
/// Rate at which horizontal speed relaxes while falling, scaled by `mod_x`
const FALL_RELAX: f32 = 0.2;
/// Horizontal speed kept when landing on a different phase or the floor
const LANDING_DAMPING: f32 = 0.8;
/// Vertical velocity while spreading with both sides open / one side open
const SPREAD_VY_BOTH: f32 = 0.5;
const SPREAD_VY_ONE: f32 = 0.25;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Lava contact rules, evaluated where the particle ended up.
    fn act(&self, ctx: &mut UpdateContext, material: Material) {
        if material != Material::Lava {
            return;
        }
        let (x, y) = (ctx.x, ctx.y);

        if let Some((nx, ny, target)) = find_ignitable(ctx, x, y) {
            if target == Material::Water {
                // One of the pair boils away
                ctx.counters.extinguished += 1;
                if ctx.rng.chance(ctx.config.lava_quench_chance) {
                    ctx.grid.take(nx, ny);
                } else {
                    ctx.grid.take(x, y);
                    return;
                }
            } else {
                ignite(ctx, nx, ny);
            }
        }

        if ctx.rng.chance(ctx.config.lava_smoke_chance) {
            ctx.emit(x, y - 1, Material::Smoke);
        }
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let (x, y) = (ctx.x, ctx.y);
        let Some(p) = ctx.grid.get(x, y) else { return };
        let material = p.material;
        let props = ctx.props(material);
        let mut v = p.velocity;

        let dt = ctx.dt;
        let (max_x, max_y, mod_x) = (props.max_x, props.max_y, props.mod_x);

        v.y = clamp(v.y + LIQUID_GRAVITY * ctx.config.gravity * dt, -max_y, max_y);

        if ctx.is_valid_move(x, y + 1, Phase::Liquid) {
            let relax = FALL_RELAX * dt * mod_x;
            v.x = if v.x.abs() <= relax { 0.0 } else { v.x - relax * dir_of(v.x) };
        } else {
            v.y -= dt * LANDING_BRAKE * dir_of(v.y);

            let left = ctx.is_valid_move(x - 1, y, Phase::Liquid);
            let right = ctx.is_valid_move(x + 1, y, Phase::Liquid);
            match (left, right) {
                (true, true) => {
                    v.y = SPREAD_VY_BOTH;
                    let dir = lateral_dir(v.x, ctx.rng) as f32;
                    v.x = clamp(v.x + mod_x * dt * dir, -max_x, max_x);
                }
                (true, false) => {
                    v.y = SPREAD_VY_ONE;
                    v.x = clamp(v.x - mod_x * dt, -max_x, -1.0);
                }
                (false, true) => {
                    v.y = SPREAD_VY_ONE;
                    v.x = clamp(v.x + mod_x * dt, 1.0, max_x);
                }
                (false, false) => v.x = 0.0,
            }

            let lands_on_other_phase = match ctx.phase_at(x, y + 1) {
                Some(below) => below != props.phase,
                None => !ctx.grid.in_bounds(x, y + 1),
            };
            if lands_on_other_phase {
                v.x *= LANDING_DAMPING;
            }
        }

        ctx.set_velocity(v);
        let hint = lateral_dir(v.x, ctx.rng);
        ctx.trace_self(to_cells(v.x), to_cells(v.y), hint, &TraceProfile::LIQUID);

        if props.acting {
            self.act(ctx, material);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vec2::Vec2;
    use crate::systems::behaviors::test_support::Harness;

    #[test]
    fn falls_through_open_space() {
        let mut h = Harness::new(3, 10, 2);
        h.put(1, 0, Material::Water);
        h.run(&LiquidBehavior::new(), 1, 0);

        assert!(h.grid.get(1, 0).is_none());
        assert_eq!(h.grid.material_at(1, 3), Some(Material::Water));
    }

    #[test]
    fn spreads_along_a_floor_with_one_open_side() {
        let mut h = Harness::new(6, 2, 2);
        for x in 0..6 {
            h.put(x, 1, Material::Stone);
        }
        h.put(0, 0, Material::Water);

        // landing damping leaves less than a whole cell of speed at first
        h.run(&LiquidBehavior::new(), 0, 0);
        assert_eq!(h.grid.material_at(0, 0), Some(Material::Water));
        assert!(h.grid.get(0, 0).unwrap().velocity.x > 0.0);

        h.run(&LiquidBehavior::new(), 0, 0);
        assert!(h.grid.get(0, 0).is_none());
        assert_eq!(h.grid.material_at(1, 0), Some(Material::Water));
        assert!(h.grid.get(1, 0).unwrap().velocity.x > 1.0);
    }

    #[test]
    fn walled_in_liquid_stops_sideways_motion() {
        let mut h = Harness::new(3, 2, 2);
        for (x, y) in [(0, 1), (1, 1), (2, 1), (0, 0), (2, 0)] {
            h.put(x, y, Material::Stone);
        }
        h.put(1, 0, Material::Water);
        h.grid.get_mut(1, 0).unwrap().velocity = Vec2::new(5.0, 0.0);
        h.run(&LiquidBehavior::new(), 1, 0);

        let p = h.grid.get(1, 0).unwrap();
        assert_eq!(p.velocity.x, 0.0);
        assert!(p.stuck);
    }

    #[test]
    fn lava_ignites_wood_it_touches() {
        // Wood below lava on the floor: lava cannot move, so it reacts in place.
        let mut ignited = 0;
        for seed in 0..200 {
            let mut h = Harness::new(3, 2, seed);
            h.put(1, 1, Material::Wood);
            h.put(0, 1, Material::Stone);
            h.put(2, 1, Material::Stone);
            h.put(0, 0, Material::Stone);
            h.put(2, 0, Material::Stone);
            h.put(1, 0, Material::Lava);
            h.run(&LiquidBehavior::new(), 1, 0);
            if h.grid.material_at(1, 1) == Some(Material::Fire) {
                ignited += 1;
                assert!(h.grid.get(1, 1).unwrap().updated);
            }
        }
        // WOOD ignition chance is 0.1
        assert!(ignited > 5 && ignited < 45, "ignited {}", ignited);
    }

    #[test]
    fn lava_and_water_never_both_survive_a_reaction() {
        for seed in 0..100 {
            let mut h = Harness::new(3, 2, seed);
            h.put(0, 1, Material::Stone);
            h.put(1, 1, Material::Water);
            h.put(2, 1, Material::Stone);
            h.put(0, 0, Material::Stone);
            h.put(2, 0, Material::Stone);
            h.put(1, 0, Material::Lava);
            h.run(&LiquidBehavior::new(), 1, 0);

            let lava = h.grid.material_at(1, 0) == Some(Material::Lava);
            let water = h.grid.material_at(1, 1) == Some(Material::Water);
            if h.counters.extinguished > 0 {
                assert!(lava ^ water, "seed {}", seed);
            } else {
                assert!(lava && water);
            }
        }
    }
}
