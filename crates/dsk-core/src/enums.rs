//! Color roles, harmony families, component kinds and animation styles.
//!
//! Enums serialize as `snake_case` (animations as `kebab-case`, matching the
//! CSS-style names downstream consumers key on). Each enum exposes `ALL` for
//! uniform draws and `as_str()` for stable string forms.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ColorRole
// ---------------------------------------------------------------------------

/// Role a document color directive is bound to.
///
/// Ordering follows the extraction order: primary, secondary, accent, background.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
}

impl ColorRole {
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Accent, Self::Background];

    /// Roles that bare hex literals are assigned to, in positional order.
    pub const POSITIONAL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Accent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ColorSource
// ---------------------------------------------------------------------------

/// Where a set of color directives came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// Found in the document text (labeled or bare hex literals).
    Document,
    /// Randomly generated because the document names no colors.
    Generated,
}

impl ColorSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Generated => "generated",
        }
    }
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HarmonyFamily
// ---------------------------------------------------------------------------

/// Rule relating the hues of a palette's primary, secondary and accent colors.
///
/// ```text
/// monochromatic        same hue, varied saturation/lightness
/// analogous            +30°, -30°
/// triadic              +120°, +240°
/// complementary        +180°, +60°
/// split_complementary  +150°, +210°
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyFamily {
    Monochromatic,
    Analogous,
    Triadic,
    Complementary,
    SplitComplementary,
}

impl HarmonyFamily {
    pub const ALL: [Self; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Triadic,
        Self::Complementary,
        Self::SplitComplementary,
    ];

    /// Hue offsets (secondary, accent) relative to the base hue, in degrees.
    #[must_use]
    pub const fn hue_offsets(self) -> (i32, i32) {
        match self {
            Self::Monochromatic => (0, 0),
            Self::Analogous => (30, -30),
            Self::Triadic => (120, 240),
            Self::Complementary => (180, 60),
            Self::SplitComplementary => (150, 210),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split_complementary",
        }
    }
}

impl fmt::Display for HarmonyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// Kind of UI building block a [`ComponentDescriptor`](crate::ComponentDescriptor) describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    GradientBanner,
    FilterChips,
    EventCards,
    ElevatedContainer,
    SectionHeading,
}

impl ComponentKind {
    pub const ALL: [Self; 5] = [
        Self::GradientBanner,
        Self::FilterChips,
        Self::EventCards,
        Self::ElevatedContainer,
        Self::SectionHeading,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GradientBanner => "gradient_banner",
            Self::FilterChips => "filter_chips",
            Self::EventCards => "event_cards",
            Self::ElevatedContainer => "elevated_container",
            Self::SectionHeading => "section_heading",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

/// Entrance animation applied to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    FadeInUp,
    SlideInLeft,
    SlideInRight,
    ZoomIn,
    BounceIn,
    RotateIn,
    FlipInX,
    ElasticIn,
}

impl Animation {
    pub const ALL: [Self; 8] = [
        Self::FadeInUp,
        Self::SlideInLeft,
        Self::SlideInRight,
        Self::ZoomIn,
        Self::BounceIn,
        Self::RotateIn,
        Self::FlipInX,
        Self::ElasticIn,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeInUp => "fade-in-up",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
            Self::ZoomIn => "zoom-in",
            Self::BounceIn => "bounce-in",
            Self::RotateIn => "rotate-in",
            Self::FlipInX => "flip-in-x",
            Self::ElasticIn => "elastic-in",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
