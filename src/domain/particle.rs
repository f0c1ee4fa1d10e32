use super::color::Rgba;
use super::materials::{Material, MaterialProps, Phase};
use super::vec2::Vec2;
use crate::util::RandomSource;

/// One grain of material. Owned by exactly one grid cell and moved, never
/// copied, between cells.
#[derive(Debug, PartialEq)]
pub struct Particle {
    pub material: Material,
    pub velocity: Vec2,
    /// Seconds left; only meaningful for decaying materials
    pub life: f32,
    pub color: Rgba,
    /// Already processed during the current tick
    pub updated: bool,
    /// Did not move on its last update (cosmetic)
    pub stuck: bool,
}

impl Particle {
    pub fn new(material: Material, props: &MaterialProps, rng: &mut dyn RandomSource) -> Self {
        let color = if props.color_jitter {
            props.base_color.jittered(rng)
        } else {
            props.base_color
        };
        Self {
            material,
            velocity: Vec2::new(0.0, props.spawn_velocity_y),
            life: if props.decaying { props.initial_lifetime } else { 0.0 },
            color,
            updated: false,
            stuck: false,
        }
    }

    /// Same as `new` but already flagged as processed for this tick, for
    /// particles created by in-tick reactions.
    pub fn fresh(material: Material, props: &MaterialProps, rng: &mut dyn RandomSource) -> Self {
        let mut p = Self::new(material, props, rng);
        p.updated = true;
        p
    }
}

/// Read-only view handed to callers of `query`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSnapshot {
    pub material: Material,
    pub color: Rgba,
    pub phase: Phase,
}
