//! Harmony palettes: five hue relationships with fixed saturation and
//! lightness per role.

use dsk_core::Palette;
use dsk_core::enums::HarmonyFamily;
use rand::Rng;
use serde_json::json;

use crate::color::hsl_to_hex;

pub const SURFACE: &str = "#FFFFFF";
pub const BACKGROUND: &str = "#F8F9FA";

/// One palette draw: the family, its base hue and the resulting palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyDraw {
    pub family: HarmonyFamily,
    pub base_hue: u16,
    pub palette: Palette,
}

impl HarmonyDraw {
    /// Pick a family uniformly, then its base hue, then build the palette.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let family = HarmonyFamily::ALL[rng.random_range(0..HarmonyFamily::ALL.len())];
        let base_hue = match family {
            HarmonyFamily::Monochromatic => rng.random_range(200..=240),
            _ => rng.random_range(0..=360),
        };
        tracing::debug!(family = %family, base_hue, "harmony drawn");
        Self {
            family,
            base_hue,
            palette: palette_for(family, base_hue),
        }
    }

    /// Summary of the draw for machine consumers.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "family": self.family.as_str(),
            "base_hue": self.base_hue,
            "palette": self.palette,
        })
    }
}

fn rotate(hue: u16, offset: i32) -> u16 {
    let rotated = (i32::from(hue) + offset).rem_euclid(360);
    u16::try_from(rotated).unwrap_or(0)
}

/// The palette for `family` around `base_hue`. Pure.
#[must_use]
pub fn palette_for(family: HarmonyFamily, base_hue: u16) -> Palette {
    let base_hue = base_hue % 360;
    if family == HarmonyFamily::Monochromatic {
        return Palette {
            primary: hsl_to_hex(base_hue, 70, 50),
            secondary: hsl_to_hex(base_hue, 60, 65),
            accent: hsl_to_hex(base_hue, 80, 40),
            surface: hsl_to_hex(base_hue, 20, 95),
            background: BACKGROUND.to_string(),
        };
    }

    let (secondary_offset, accent_offset) = family.hue_offsets();
    Palette {
        primary: hsl_to_hex(base_hue, 75, 50),
        secondary: hsl_to_hex(rotate(base_hue, secondary_offset), 70, 55),
        accent: hsl_to_hex(rotate(base_hue, accent_offset), 80, 45),
        surface: SURFACE.to_string(),
        background: BACKGROUND.to_string(),
    }
}
