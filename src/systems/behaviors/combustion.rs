//! Contact reactions shared by fire and lava

use super::UpdateContext;
use crate::domain::color::{channel, Rgba};
use crate::domain::materials::Material;

/// Neighbors checked for reactions, in priority order: down, up, right, left
pub(super) const CONTACT_ORDER: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// First 4-neighbor of (x, y) that is flammable and passes its own
/// ignition roll. Each candidate gets one roll.
pub(super) fn find_ignitable(ctx: &mut UpdateContext, x: i32, y: i32) -> Option<(i32, i32, Material)> {
    for (dx, dy) in CONTACT_ORDER {
        let (nx, ny) = (x + dx, y + dy);
        let Some(neighbor) = ctx.grid.get(nx, ny) else { continue };
        let material = neighbor.material;
        let props = ctx.props(material);
        if props.flammable && ctx.rng.chance(props.ignition_chance) {
            return Some((nx, ny, material));
        }
    }
    None
}

pub(super) fn ignite(ctx: &mut UpdateContext, x: i32, y: i32) {
    ctx.replace(x, y, Material::Fire);
    ctx.counters.ignitions += 1;
}

/// Fire cools from yellow-white towards a dim translucent red as it burns out.
pub(super) fn burn_fade(color: Rgba, life: f32) -> Rgba {
    let spent = 1.0 - life;
    Rgba {
        r: color.r,
        g: channel(140.0 - spent * 30.0),
        b: channel(40.0 - spent * 40.0),
        a: channel(255.0 - spent * 150.0),
    }
}

/// Gases turn translucent during their last second.
pub(super) fn thin_out(color: Rgba, life: f32) -> Rgba {
    if life >= 1.0 {
        return color;
    }
    Rgba { a: channel(255.0 - (1.0 - life) * 150.0), ..color }
}
