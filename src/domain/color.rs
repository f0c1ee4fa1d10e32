use serde::{Deserialize, Serialize};

use crate::util::RandomSource;

/// Background color in ABGR format (little-endian bytes [RR,GG,BB,AA]).
pub const BG_COLOR: u32 = 0xFF00_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Packed ABGR, ready for a canvas `ImageData` copy.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }

    /// Same random shift in [-10, 10) applied to every channel.
    pub fn jittered(self, rng: &mut dyn RandomSource) -> Self {
        let shift = rng.range_i32(-10, 10);
        Self {
            r: shift_channel(self.r, shift),
            g: shift_channel(self.g, shift),
            b: shift_channel(self.b, shift),
            a: self.a,
        }
    }
}

#[inline]
pub fn shift_channel(c: u8, delta: i32) -> u8 {
    (c as i32 + delta).clamp(0, 255) as u8
}

/// Saturating float → channel conversion for fade formulas.
#[inline]
pub fn channel(v: f32) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
