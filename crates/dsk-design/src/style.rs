//! Component style synthesis.
//!
//! Each [`ComponentKind`] has a fixed attribute template; the synthesizer
//! fills it from the palette, the caller's content and random draws from
//! bounded option sets. Attribute names are part of the output contract:
//! downstream renderers key on them.

use dsk_core::enums::{Animation, ComponentKind};
use dsk_core::{ComponentDescriptor, Palette};
use rand::Rng;
use serde_json::{Map, Value, json};

pub const TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
const CARD_TRANSITION: &str = "all 0.4s cubic-bezier(0.4, 0, 0.2, 1)";

const SHADOWS: [&str; 4] = [
    "0 10px 40px rgba(0,0,0,0.15)",
    "0 15px 50px rgba(0,0,0,0.2)",
    "0 20px 60px rgba(0,0,0,0.25)",
    "0 8px 32px rgba(0,0,0,0.12)",
];

struct GlassPreset {
    blur: u8,
    opacity: f64,
    border: &'static str,
}

const GLASS: [GlassPreset; 3] = [
    GlassPreset {
        blur: 20,
        opacity: 0.15,
        border: "rgba(255,255,255,0.2)",
    },
    GlassPreset {
        blur: 15,
        opacity: 0.2,
        border: "rgba(255,255,255,0.3)",
    },
    GlassPreset {
        blur: 25,
        opacity: 0.1,
        border: "rgba(255,255,255,0.15)",
    },
];

const ICONS: [&str; 5] = ["sparkles", "star", "zap", "trending-up", "award"];

const DEFAULT_TITLE: &str = "Dynamic Title";
const DEFAULT_SUBTITLE: &str = "Professional subtitle";
const DEFAULT_ITEMS: [&str; 4] = ["Dynamic", "Professional", "Modern", "Elegant"];
const DEFAULT_CARD_TITLE: &str = "Dynamic Cards";
const DEFAULT_CONTAINER_TITLE: &str = "Enhanced Container";
const DEFAULT_SECTION_TITLE: &str = "Dynamic Section";

/// The five gradient templates over a palette.
#[must_use]
pub fn gradients(palette: &Palette) -> [String; 5] {
    let Palette {
        primary,
        secondary,
        accent,
        ..
    } = palette;
    [
        format!("linear-gradient(135deg, {primary}, {secondary})"),
        format!("linear-gradient(45deg, {secondary}, {accent})"),
        format!("linear-gradient(-45deg, {accent}, {primary})"),
        format!("radial-gradient(circle, {primary}, {secondary})"),
        format!("conic-gradient(from 0deg, {primary}, {secondary}, {accent}, {primary})"),
    ]
}

/// Caller-supplied content for a component. Unset fields take the kind's
/// literal default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Option<Vec<String>>,
    pub card_title: Option<String>,
}

impl ComponentContent {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn items(items: Vec<String>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn card(card_title: impl Into<String>) -> Self {
        Self {
            card_title: Some(card_title.into()),
            ..Self::default()
        }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, options: &'a [T]) -> &'a T {
    &options[rng.random_range(0..options.len())]
}

fn pick_gradient<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> String {
    let mut options = gradients(palette);
    let index = rng.random_range(0..options.len());
    std::mem::take(&mut options[index])
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Build one styled component descriptor.
///
/// The animation is drawn first, then the kind's attributes in template
/// order, so a given RNG state always yields the same descriptor.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ComponentKind,
    palette: &Palette,
    content: &ComponentContent,
) -> ComponentDescriptor {
    let animation = *pick(rng, &Animation::ALL);
    let title = |default: &str| content.title.clone().unwrap_or_else(|| default.to_string());

    let attributes = match kind {
        ComponentKind::GradientBanner => json!({
            "gradient": pick_gradient(rng, palette),
            "height": rng.random_range(260..=320_u32),
            "title": title(DEFAULT_TITLE),
            "subtitle": content.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE),
            "overlay": format!("rgba(0,0,0,{:.2})", rng.random_range(0.10..=0.30_f64)),
            "blur_effect": true,
            "text_shadow": "0 2px 4px rgba(0,0,0,0.3)",
            "border_radius": rng.random_range(20..=32_u32),
        }),
        ComponentKind::FilterChips => {
            let glass = pick(rng, &GLASS);
            let items = content.items.clone().unwrap_or_else(|| {
                DEFAULT_ITEMS.iter().map(ToString::to_string).collect()
            });
            json!({
                "items": items,
                "chip_style": {
                    "background": format!("rgba(255,255,255,{})", glass.opacity),
                    "backdrop_filter": format!("blur({}px)", glass.blur),
                    "border": format!("1px solid {}", glass.border),
                    "border_radius": rng.random_range(20..=30_u32),
                    "padding": "12px 24px",
                    "shadow": pick(rng, &SHADOWS),
                    "hover_transform": "translateY(-2px) scale(1.05)",
                    "active_gradient": pick_gradient(rng, palette),
                },
            })
        }
        ComponentKind::EventCards => json!({
            "grid_columns": pick(rng, &[2_u8, 3]),
            "cardTitle": content.card_title.as_deref().unwrap_or(DEFAULT_CARD_TITLE),
            "card_style": {
                "background": pick_gradient(rng, palette),
                "border_radius": rng.random_range(20..=32_u32),
                "shadow": pick(rng, &SHADOWS),
                "hover_transform": "translateY(-8px) scale(1.02)",
                "transition": CARD_TRANSITION,
                "overlay": "rgba(255,255,255,0.1)",
                "text_color": "#FFFFFF",
            },
        }),
        ComponentKind::ElevatedContainer => json!({
            "title": title(DEFAULT_CONTAINER_TITLE),
            "background": pick_gradient(rng, palette),
            "border_radius": rng.random_range(24..=36_u32),
            "shadow": pick(rng, &SHADOWS),
            "padding": rng.random_range(28..=40_u32),
            "elevation": rng.random_range(6..=12_u32),
            "backdrop_filter": "blur(10px)",
        }),
        ComponentKind::SectionHeading => json!({
            "title": title(DEFAULT_SECTION_TITLE),
            "background": palette.primary,
            "text_color": "#FFFFFF",
            "icon": pick(rng, &ICONS),
            "padding": "20px 32px",
            "border_radius": rng.random_range(16..=24_u32),
            "shadow": pick(rng, &SHADOWS),
            "text_shadow": "0 1px 2px rgba(0,0,0,0.2)",
        }),
    };

    ComponentDescriptor {
        kind,
        animation,
        transition_spec: TRANSITION.to_string(),
        style_attributes: into_map(attributes),
    }
}
