pub mod color;
pub mod config;
pub mod materials;
pub mod particle;
pub mod vec2;

pub use color::Rgba;
pub use config::SimConfig;
pub use materials::{Material, MaterialProps, MaterialTable, Phase, MAT_EMPTY};
pub use particle::{Particle, ParticleSnapshot};
pub use vec2::Vec2;
