//! Material table - per-material physical properties
//!
//! The built-in table reproduces the tuned values the game ships with.
//! A replacement table can be loaded from a JSON bundle keyed by material
//! name; every material must be present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use crate::util::{SimError, SimResult};

/// Render-buffer id for an empty cell.
pub const MAT_EMPTY: u8 = 0;

/// Mobility class. The declaration order is the displacement order: a
/// particle may only push into cells held by a strictly greater phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SolidStuck = 0,
    Solid = 1,
    Liquid = 2,
    Gas = 3,
}

impl Phase {
    /// Can a particle of this phase enter a cell occupied by `occupant`?
    #[inline]
    pub fn can_displace(self, occupant: Phase) -> bool {
        occupant > self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Material {
    Sand = 1,
    Water = 2,
    Smoke = 3,
    Wood = 4,
    Lava = 5,
    Stone = 6,
    Fire = 7,
    Oil = 8,
}

impl Material {
    pub const COUNT: usize = 8;

    pub const ALL: [Material; Material::COUNT] = [
        Material::Sand,
        Material::Water,
        Material::Smoke,
        Material::Wood,
        Material::Lava,
        Material::Stone,
        Material::Fire,
        Material::Oil,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> SimResult<Self> {
        match id {
            1 => Ok(Material::Sand),
            2 => Ok(Material::Water),
            3 => Ok(Material::Smoke),
            4 => Ok(Material::Wood),
            5 => Ok(Material::Lava),
            6 => Ok(Material::Stone),
            7 => Ok(Material::Fire),
            8 => Ok(Material::Oil),
            _ => Err(SimError::UnknownMaterial(id)),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Smoke => "smoke",
            Material::Wood => "wood",
            Material::Lava => "lava",
            Material::Stone => "stone",
            Material::Fire => "fire",
            Material::Oil => "oil",
        }
    }

    pub fn from_key(key: &str) -> SimResult<Self> {
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.key() == key)
            .ok_or_else(|| SimError::UnknownMaterialKey(key.to_string()))
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize - 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProps {
    /// Horizontal acceleration / damping modifier
    pub mod_x: f32,
    /// Vertical acceleration / damping modifier
    pub mod_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub flammable: bool,
    /// Per-contact ignition probability in [0, 1]
    #[serde(default)]
    pub ignition_chance: f32,
    pub decaying: bool,
    /// Seconds of life for decaying materials
    #[serde(default)]
    pub initial_lifetime: f32,
    /// Has per-tick interaction logic beyond movement (fire, lava)
    #[serde(default)]
    pub acting: bool,
    pub phase: Phase,
    pub base_color: Rgba,
    #[serde(default)]
    pub spawn_velocity_y: f32,
    #[serde(default)]
    pub color_jitter: bool,
    /// What a decaying particle turns into when its life runs out
    #[serde(default)]
    pub expires_into: Option<Material>,
}

impl MaterialProps {
    const fn stuck(color: Rgba) -> Self {
        Self {
            mod_x: 0.0,
            mod_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            flammable: false,
            ignition_chance: 0.0,
            decaying: false,
            initial_lifetime: 0.0,
            acting: false,
            phase: Phase::SolidStuck,
            base_color: color,
            spawn_velocity_y: 0.0,
            color_jitter: true,
            expires_into: None,
        }
    }

    fn validate(&self, key: &str) -> SimResult<()> {
        let finite = [self.mod_x, self.mod_y, self.max_x, self.max_y, self.initial_lifetime, self.spawn_velocity_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SimError::InvalidConfig(format!("{}: non-finite property", key)));
        }
        if self.max_x < 0.0 || self.max_y < 0.0 {
            return Err(SimError::InvalidConfig(format!("{}: speed caps must be >= 0", key)));
        }
        if !(0.0..=1.0).contains(&self.ignition_chance) {
            return Err(SimError::InvalidConfig(format!(
                "{}: ignitionChance {} outside [0, 1]",
                key, self.ignition_chance
            )));
        }
        if self.decaying && self.initial_lifetime <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "{}: decaying material needs a positive initialLifetime",
                key
            )));
        }
        Ok(())
    }
}

/// Immutable registry shared by the whole simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTable {
    props: [MaterialProps; Material::COUNT],
}

impl MaterialTable {
    pub fn builtin() -> Self {
        let sand = MaterialProps {
            mod_x: 2.0,
            mod_y: 2.0,
            max_x: 2.0,
            max_y: 10.0,
            phase: Phase::Solid,
            spawn_velocity_y: 1.0,
            ..MaterialProps::stuck(Rgba::rgb(140, 103, 50))
        };
        let water = MaterialProps {
            mod_x: 30.0,
            mod_y: 2.0,
            max_x: 10.0,
            max_y: 10.0,
            flammable: true,
            ignition_chance: 0.5,
            phase: Phase::Liquid,
            spawn_velocity_y: 3.0,
            color_jitter: false,
            ..MaterialProps::stuck(Rgba::rgb(0, 121, 241))
        };
        let smoke = MaterialProps {
            mod_x: 2.0,
            mod_y: 2.0,
            max_x: 5.0,
            max_y: 10.0,
            decaying: true,
            initial_lifetime: 5.0,
            phase: Phase::Gas,
            color_jitter: false,
            ..MaterialProps::stuck(Rgba::rgb(60, 60, 60))
        };
        let wood = MaterialProps {
            flammable: true,
            ignition_chance: 0.1,
            ..MaterialProps::stuck(Rgba::rgb(76, 63, 47))
        };
        let lava = MaterialProps {
            mod_x: 2.0,
            mod_y: 2.0,
            max_x: 1.5,
            max_y: 3.0,
            acting: true,
            phase: Phase::Liquid,
            spawn_velocity_y: 3.0,
            color_jitter: false,
            ..MaterialProps::stuck(Rgba::rgb(255, 101, 32))
        };
        let stone = MaterialProps::stuck(Rgba::rgb(100, 100, 100));
        let fire = MaterialProps {
            decaying: true,
            initial_lifetime: 1.0,
            acting: true,
            color_jitter: false,
            expires_into: Some(Material::Smoke),
            ..MaterialProps::stuck(Rgba::rgb(255, 180, 10))
        };
        let oil = MaterialProps {
            mod_x: 2.0,
            mod_y: 2.0,
            max_x: 10.0,
            max_y: 10.0,
            flammable: true,
            ignition_chance: 0.5,
            phase: Phase::Liquid,
            spawn_velocity_y: 3.0,
            color_jitter: false,
            ..MaterialProps::stuck(Rgba::rgb(40, 30, 21))
        };

        Self {
            props: [sand, water, smoke, wood, lava, stone, fire, oil],
        }
    }

    /// Load a complete table from `{ "materials": { "sand": {...}, ... } }`.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let bundle: MaterialBundle = serde_json::from_str(json)?;
        let mut slots: [Option<MaterialProps>; Material::COUNT] = [None; Material::COUNT];

        for (key, props) in bundle.materials {
            let material = Material::from_key(&key)?;
            props.validate(&key)?;
            slots[material.slot()] = Some(props);
        }

        let mut table = Self::builtin();
        for material in Material::ALL {
            let props = slots[material.slot()].ok_or(SimError::MissingMaterial(material.key()))?;
            table.props[material.slot()] = props;
        }

        log::info!("loaded material bundle ({} materials)", Material::COUNT);
        Ok(table)
    }

    #[inline]
    pub fn get(&self, material: Material) -> &MaterialProps {
        &self.props[material.slot()]
    }

    #[inline]
    pub fn phase(&self, material: Material) -> Phase {
        self.get(material).phase
    }

    /// JSON description of the active table, in the same shape `from_json`
    /// accepts.
    pub fn manifest_json(&self) -> String {
        let materials: HashMap<&'static str, &MaterialProps> =
            Material::ALL.iter().map(|m| (m.key(), self.get(*m))).collect();
        let out = MaterialManifest { format_version: 1, materials };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Deserialize)]
struct MaterialBundle {
    materials: HashMap<String, MaterialProps>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifest<'a> {
    format_version: u32,
    materials: HashMap<&'static str, &'a MaterialProps>,
}
