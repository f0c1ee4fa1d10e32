//! StuckBehavior - immovable materials (stone, wood, fire)
//!
//! Stuck particles never move. Decaying ones (fire) burn down and turn
//! into their successor; acting ones (fire) spread to flammable neighbors,
//! get put out by water, and puff smoke when idle.

use super::combustion::{burn_fade, find_ignitable, ignite};
use super::{Behavior, UpdateContext};
use crate::domain::materials::Material;

pub struct StuckBehavior;

impl StuckBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Returns false if the particle burnt out.
    fn decay(&self, ctx: &mut UpdateContext, material: Material) -> bool {
        if !ctx.props(material).decaying || !ctx.rng.chance(ctx.config.decay_chance) {
            return true;
        }
        let dt = ctx.dt;
        let Some(p) = ctx.grid.get_mut(ctx.x, ctx.y) else { return false };
        p.life -= dt;
        if material == Material::Fire {
            p.color = burn_fade(p.color, p.life);
        }
        if p.life <= 0.0 {
            ctx.expire(material);
            return false;
        }
        true
    }

    fn burn(&self, ctx: &mut UpdateContext) {
        let (x, y) = (ctx.x, ctx.y);
        match find_ignitable(ctx, x, y) {
            Some((nx, ny, Material::Water)) => {
                // Put out: the fire goes away and the water takes its cell
                ctx.grid.take(x, y);
                if ctx.grid.move_particle(nx, ny, x, y) {
                    if let Some(water) = ctx.grid.get_mut(x, y) {
                        water.updated = true;
                    }
                }
                ctx.counters.extinguished += 1;
            }
            Some((nx, ny, _)) => ignite(ctx, nx, ny),
            None => {
                if ctx.rng.chance(ctx.config.fire_smoke_chance) {
                    ctx.emit(x, y - 1, Material::Smoke);
                }
            }
        }
    }
}

impl Behavior for StuckBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(p) = ctx.grid.get(ctx.x, ctx.y) else { return };
        let material = p.material;

        if !self.decay(ctx, material) {
            return;
        }
        if ctx.props(material).acting && material == Material::Fire {
            self.burn(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::Harness;

    #[test]
    fn stone_is_inert() {
        let mut h = Harness::new(3, 3, 9);
        h.put(1, 1, Material::Stone);
        let before = h.grid.get(1, 1).unwrap().color;
        h.run(&StuckBehavior::new(), 1, 1);

        let p = h.grid.get(1, 1).unwrap();
        assert_eq!(p.material, Material::Stone);
        assert_eq!(p.color, before);
        assert!(!p.updated);
        assert_eq!(h.counters, Default::default());
    }

    #[test]
    fn fire_burns_out_into_smoke() {
        let mut h = Harness::new(3, 3, 9);
        h.config.decay_chance = 1.0;
        h.config.fire_smoke_chance = 0.0;
        h.put(1, 1, Material::Fire);
        h.grid.get_mut(1, 1).unwrap().life = 0.01;
        h.run(&StuckBehavior::new(), 1, 1);

        let p = h.grid.get(1, 1).unwrap();
        assert_eq!(p.material, Material::Smoke);
        assert!(p.updated);
        assert_eq!(h.counters.expired, 1);
    }

    #[test]
    fn fire_color_fades_as_it_burns() {
        let mut h = Harness::new(3, 3, 9);
        h.config.decay_chance = 1.0;
        h.config.fire_smoke_chance = 0.0;
        h.put(1, 1, Material::Fire);
        h.run(&StuckBehavior::new(), 1, 1);

        let p = h.grid.get(1, 1).unwrap();
        assert!(p.life < 1.0);
        assert!(p.color.a < 255);
        assert!(p.color.g < 180);
    }

    #[test]
    fn water_puts_fire_out_and_takes_its_cell() {
        let mut extinguished = 0;
        for seed in 0..50 {
            let mut h = Harness::new(3, 3, seed);
            h.config.decay_chance = 0.0;
            h.put(1, 1, Material::Fire);
            h.put(2, 1, Material::Water);
            h.run(&StuckBehavior::new(), 1, 1);

            if h.counters.extinguished == 1 {
                extinguished += 1;
                assert_eq!(h.grid.material_at(1, 1), Some(Material::Water));
                assert!(h.grid.get(2, 1).is_none());
                assert!(h.grid.get(1, 1).unwrap().updated);
                assert_eq!(h.grid.particle_count(), 1);
            } else {
                assert_eq!(h.grid.material_at(1, 1), Some(Material::Fire));
            }
        }
        assert!(extinguished > 10, "extinguished {}", extinguished);
    }

    #[test]
    fn idle_fire_emits_smoke_above() {
        let mut h = Harness::new(3, 3, 9);
        h.config.decay_chance = 0.0;
        h.config.fire_smoke_chance = 1.0;
        h.put(1, 1, Material::Fire);
        h.run(&StuckBehavior::new(), 1, 1);

        let smoke = h.grid.get(1, 0).unwrap();
        assert_eq!(smoke.material, Material::Smoke);
        assert!(smoke.updated);
        assert_eq!(h.counters.emitted, 1);
    }

    #[test]
    fn smoke_emission_respects_particle_limit() {
        let mut h = Harness::new(3, 3, 9);
        h.config.decay_chance = 0.0;
        h.config.fire_smoke_chance = 1.0;
        h.config.particle_limit = Some(1);
        h.put(1, 1, Material::Fire);
        h.run(&StuckBehavior::new(), 1, 1);

        assert!(h.grid.get(1, 0).is_none());
        assert_eq!(h.grid.particle_count(), 1);
    }
}
