//! The content-analysis record derived from raw document text.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ColorRole, ColorSource};

/// Placeholder feature used when a document yields no features.
pub const DEFAULT_FEATURE: &str = "Core app functionality";
pub const DEFAULT_PERSONA: &str = "User";
pub const DEFAULT_TECH_SPEC: &str = "Modern web stack";
pub const DEFAULT_WORKFLOW: &str = "User interaction flow";
pub const DEFAULT_ENTITIES: [&str; 2] = ["Data", "Content"];
pub const DEFAULT_SECURITY_NOTES: [&str; 2] = ["Authentication", "Data protection"];

/// Structured description of an application's identity, domain and feature set.
///
/// Every list carries a literal default when extraction finds nothing, so the
/// record is never partially empty. The two keyword lists (`sections`,
/// `capabilities`) are the exception: they stay empty when the document
/// mentions no known screens or capabilities, and consumers supply their own
/// fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentAnalysis {
    pub project_name: String,
    /// Single lowercase token (e.g. `recipe`, `online_shopping`).
    pub domain: String,
    /// Ordered, at most 8.
    pub features: Vec<String>,
    /// Unique, first-seen order, at most 6.
    pub personas: Vec<String>,
    /// Unique, at most 8.
    pub tech_specs: Vec<String>,
    /// Ordered, at most 6.
    pub workflows: Vec<String>,
    /// Unique, at most 6.
    pub data_entities: Vec<String>,
    /// At most 3.
    pub security_notes: Vec<String>,
    /// Colors the document names explicitly (0-4 entries).
    #[serde(default)]
    pub explicit_colors: BTreeMap<ColorRole, String>,
    /// Screen names the document mentions (`Login`, `Dashboard`, ...).
    #[serde(default)]
    pub sections: Vec<String>,
    /// Capability keywords the document mentions (`search`, `payment`, ...).
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl ContentAnalysis {
    /// Record with every list at its literal default.
    #[must_use]
    pub fn placeholder(project_name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            domain: domain.into(),
            features: vec![DEFAULT_FEATURE.to_string()],
            personas: vec![DEFAULT_PERSONA.to_string()],
            tech_specs: vec![DEFAULT_TECH_SPEC.to_string()],
            workflows: vec![DEFAULT_WORKFLOW.to_string()],
            data_entities: DEFAULT_ENTITIES.iter().map(ToString::to_string).collect(),
            security_notes: DEFAULT_SECURITY_NOTES
                .iter()
                .map(ToString::to_string)
                .collect(),
            explicit_colors: BTreeMap::new(),
            sections: Vec::new(),
            capabilities: Vec::new(),
        }
    }

    /// The domain as a display label, e.g. `online_shopping` -> `Online Shopping`.
    #[must_use]
    pub fn app_type(&self) -> String {
        self.domain
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect::<String>()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Color directives for a document: either found in its text or generated.
///
/// Never empty. The `Display` form is the human-readable label list handed to
/// the drafting prompt, e.g. `Document colors - primary: #112233, accent: #445566`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ColorDirectives {
    pub source: ColorSource,
    pub colors: BTreeMap<ColorRole, String>,
}

impl fmt::Display for ColorDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.source {
            ColorSource::Document => "Document colors",
            ColorSource::Generated => "Dynamic colors",
        };
        let parts = self
            .colors
            .iter()
            .map(|(role, hex)| format!("{role}: {hex}"))
            .collect::<Vec<_>>();
        write!(f, "{label} - {}", parts.join(", "))
    }
}
