//! # dsk-extract
//!
//! Heuristic signal extraction for docsketch: turns free-form requirements
//! text into a [`ContentAnalysis`] record.
//!
//! Every piece of the record comes from a cascade of regex strategies tuned
//! against real documents:
//! - **Project name**: explicit labels, title lines, domain dictionaries,
//!   compound words, capitalized-word frequency, then a terminal fallback
//! - **Domain**: frequency vote over product/purpose/action phrases
//! - **Content lists**: bullets, numbered steps, modal sentences, persona
//!   phrases, technology names, article nouns
//! - **Colors**: labeled hex values, then bare hex literals
//!
//! Extraction never fails. The word lists come from [`Lexicon`] so they can
//! be tuned through configuration; only compiling a malformed configured
//! pattern can error, and [`analyze`] absorbs even that.

mod colors;
mod content;
mod domain;
mod error;
mod keywords;
mod name;
mod text;

pub use content::StructuredContent;
pub use domain::FALLBACK_DOMAIN;
pub use error::ExtractError;

use dsk_config::{Lexicon, LimitsConfig};
use dsk_core::analysis::{
    DEFAULT_ENTITIES, DEFAULT_FEATURE, DEFAULT_PERSONA, DEFAULT_SECURITY_NOTES, DEFAULT_TECH_SPEC,
    DEFAULT_WORKFLOW,
};
use dsk_core::{ColorDirectives, ContentAnalysis};
use rand::Rng;

use colors::ColorPatterns;
use content::ContentPatterns;
use domain::DomainPatterns;
use name::NamePatterns;

/// Extracts a [`ContentAnalysis`] from document text.
///
/// Owns its compiled patterns, so one instance can serve any number of
/// documents and be shared across threads.
pub struct SignalExtractor {
    lexicon: Lexicon,
    limits: LimitsConfig,
    names: NamePatterns,
    domains: DomainPatterns,
    content: ContentPatterns,
    colors: ColorPatterns,
}

impl SignalExtractor {
    /// Compile every pattern the extractor needs.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if a configured name label pattern is invalid
    /// or lacks a capture group.
    pub fn new(lexicon: Lexicon, limits: LimitsConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            names: NamePatterns::compile(&lexicon)?,
            domains: DomainPatterns::compile()?,
            content: ContentPatterns::compile(&lexicon)?,
            colors: ColorPatterns::compile()?,
            lexicon,
            limits,
        })
    }

    /// Extractor with the built-in lexicon and limits.
    ///
    /// # Errors
    ///
    /// Only fails if a built-in pattern is malformed.
    pub fn with_defaults() -> Result<Self, ExtractError> {
        Self::new(Lexicon::default(), LimitsConfig::default())
    }

    /// Full analysis with literal defaults for every empty list.
    #[must_use]
    pub fn analyze(&self, text: &str) -> ContentAnalysis {
        let content = self.content(text);
        ContentAnalysis {
            project_name: self.project_name(text),
            domain: self.domain(text),
            features: or_default(content.features, &[DEFAULT_FEATURE]),
            personas: or_default(content.personas, &[DEFAULT_PERSONA]),
            tech_specs: or_default(content.tech_specs, &[DEFAULT_TECH_SPEC]),
            workflows: or_default(content.workflows, &[DEFAULT_WORKFLOW]),
            data_entities: or_default(content.data_entities, &DEFAULT_ENTITIES),
            security_notes: or_default(content.security_notes, &DEFAULT_SECURITY_NOTES),
            explicit_colors: self.colors.explicit(text),
            sections: self.sections(text),
            capabilities: self.capabilities(text),
        }
    }

    /// A short human-readable project name. Never empty, at most 40 chars.
    #[must_use]
    pub fn project_name(&self, text: &str) -> String {
        self.names.infer(&self.lexicon, text)
    }

    /// A single lowercase domain token such as `recipe` or `pet_care`.
    #[must_use]
    pub fn domain(&self, text: &str) -> String {
        self.domains.classify(&self.lexicon, text)
    }

    /// Content lists, capped but without defaults.
    #[must_use]
    pub fn content(&self, text: &str) -> StructuredContent {
        self.content.extract(&self.lexicon, &self.limits, text)
    }

    /// Colors named by the document, or three random ones drawn from `rng`.
    pub fn color_directives<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ColorDirectives {
        self.colors.directives(text, rng)
    }

    #[must_use]
    pub fn sections(&self, text: &str) -> Vec<String> {
        keywords::sections(&self.lexicon, text, self.limits.sections)
    }

    #[must_use]
    pub fn capabilities(&self, text: &str) -> Vec<String> {
        keywords::capabilities(&self.lexicon, text, self.limits.capabilities)
    }
}

fn or_default(items: Vec<String>, default: &[&str]) -> Vec<String> {
    if items.is_empty() {
        default.iter().map(ToString::to_string).collect()
    } else {
        items
    }
}

/// Analyze `text`, degrading to a placeholder record if the extractor cannot
/// be built from the given lexicon.
#[must_use]
pub fn analyze(text: &str, lexicon: &Lexicon, limits: &LimitsConfig) -> ContentAnalysis {
    match SignalExtractor::new(lexicon.clone(), limits.clone()) {
        Ok(extractor) => extractor.analyze(text),
        Err(error) => {
            tracing::warn!(%error, "extractor unavailable, using placeholder analysis");
            ContentAnalysis::placeholder(name::emergency_name(), FALLBACK_DOMAIN)
        }
    }
}
