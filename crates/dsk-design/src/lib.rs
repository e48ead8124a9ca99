//! # dsk-design
//!
//! Procedural visual design for docsketch: turns a [`ContentAnalysis`] into
//! a [`Report`] with a harmony palette, styled components and screens.
//!
//! All randomness flows from one [`DesignSeed`] per [`DesignEngine`]:
//! - **Palette**: harmony family and base hue ([`harmony`])
//! - **Components**: animation, gradients, shadows and sizes ([`style`])
//! - **Names**: the design-file suffix ([`naming`])
//!
//! A fixed seed reproduces a report exactly; [`DesignSeed::now`] mixes in
//! the wall clock so repeated generations for the same project differ.
//! Prompt building and the collaborator traits live in [`prompt`] and
//! [`handoff`].

pub mod color;
pub mod error;
pub mod handoff;
pub mod harmony;
pub mod naming;
pub mod prompt;
pub mod report;
pub mod screens;
pub mod seed;
pub mod style;

pub use error::DesignError;
pub use handoff::{DesignFileClient, DraftingModel, HandOff};
pub use harmony::HarmonyDraw;
pub use seed::DesignSeed;

use dsk_config::DesignConfig;
use dsk_core::{ContentAnalysis, Report};
use rand_pcg::Pcg64;

/// Owns the generator for one design run.
///
/// Callers build one engine per request; engines are never shared.
#[derive(Debug, Clone)]
pub struct DesignEngine {
    seed: DesignSeed,
    rng: Pcg64,
    config: DesignConfig,
}

impl DesignEngine {
    #[must_use]
    pub fn new(seed: DesignSeed, config: DesignConfig) -> Self {
        Self {
            seed,
            rng: seed.rng(),
            config,
        }
    }

    /// Engine seeded from `identity` and the current time.
    #[must_use]
    pub fn for_identity(identity: &str, config: DesignConfig) -> Self {
        Self::new(DesignSeed::now(identity), config)
    }

    #[must_use]
    pub const fn seed(&self) -> DesignSeed {
        self.seed
    }

    /// The engine's generator, for draws outside the report (generated
    /// colors, file names).
    pub const fn rng_mut(&mut self) -> &mut Pcg64 {
        &mut self.rng
    }

    /// Draw the next harmony palette.
    pub fn palette(&mut self) -> HarmonyDraw {
        HarmonyDraw::draw(&mut self.rng)
    }

    /// Draw a palette, assemble screens with it and build the report.
    pub fn report(&mut self, analysis: &ContentAnalysis) -> Report {
        let draw = self.palette();
        let screens = screens::assemble(&mut self.rng, analysis, &draw.palette);
        tracing::debug!(
            seed = self.seed.value(),
            family = %draw.family,
            screens = screens.len(),
            "report generated"
        );
        report::build(analysis, &draw, screens, &self.config)
    }
}
