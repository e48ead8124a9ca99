//! Heuristic word lists driving text extraction.
//!
//! These are hand-tuned constants with no formal justification. They live in
//! configuration so they can be edited per deployment (`[lexicon]` in
//! `config.toml`); the defaults reproduce the tuned values exactly. Every list
//! is lowercase unless noted.

use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_name_label_patterns() -> Vec<String> {
    strings(&[
        r#"(?:Product|Project|Application|App|System|Platform|Tool)\s*Name\s*:?\s*["']?([A-Za-z][A-Za-z0-9\s&-]{2,35})["']?"#,
        r#"(?:Product|Project|Application|App|System|Platform|Tool)\s*:?\s*["']?([A-Za-z][A-Za-z0-9\s&-]{2,35})["']?"#,
        r#"PRD\s*(?:for|of)?\s*:?\s*["']?([A-Za-z][A-Za-z0-9\s&-]{2,35})["']?"#,
        r#"Title\s*:?\s*["']?([A-Za-z][A-Za-z0-9\s&-]{2,35})["']?"#,
        r#"Name\s*:?\s*["']?([A-Za-z][A-Za-z0-9\s&-]{2,35})["']?"#,
        r"([A-Za-z][A-Za-z0-9\s&-]*(?:Calculator|App|Application|System|Platform|Tool|Manager|Portal|Dashboard))",
        r#""([A-Za-z][A-Za-z0-9\s&-]{3,35})""#,
        r"'([A-Za-z][A-Za-z0-9\s&-]{3,35})'",
    ])
}

fn default_name_reject_fragments() -> Vec<String> {
    strings(&[
        "document",
        "page",
        "section",
        "prd",
        "requirements",
        "specification",
        "the",
        "and",
        "for",
        "is",
        "to",
        "provide",
        "reliable",
        "will",
        "can",
        "should",
        "must",
    ])
}

fn default_title_metadata_markers() -> Vec<String> {
    strings(&[
        "http", "www", "@", "page", "document", "pdf", "version", "date", "created", "modified",
        "author", "subject",
    ])
}

fn default_title_reject_fragments() -> Vec<String> {
    strings(&[
        "document",
        "page",
        "section",
        "requirements",
        "is",
        "to",
        "provide",
        "reliable",
        "will",
        "can",
        "should",
        "must",
    ])
}

fn default_compound_stop_fragments() -> Vec<String> {
    strings(&["the", "and", "for", "with", "this", "that"])
}

fn default_frequency_skip_words() -> Vec<String> {
    strings(&[
        "the",
        "and",
        "for",
        "with",
        "this",
        "that",
        "document",
        "page",
        "section",
        "requirements",
        "specification",
        "description",
        "overview",
        "introduction",
        "chapter",
        "part",
        "appendix",
        "figure",
        "table",
        "example",
        "note",
    ])
}

fn default_domain_stop_words() -> Vec<String> {
    strings(&[
        "the",
        "and",
        "for",
        "with",
        "this",
        "that",
        "from",
        "have",
        "will",
        "been",
        "were",
        "their",
        "there",
        "would",
        "could",
        "should",
        "about",
        "which",
        "these",
        "those",
        "document",
        "requirements",
        "specification",
        "business",
        "technical",
        "user",
        "system",
    ])
}

fn default_heading_blacklist() -> Vec<String> {
    strings(&[
        "business requirements",
        "user personas",
        "technical specs",
        "technical specifications",
        "security requirements",
        "introduction",
        "overview",
        "conclusion",
        "appendix",
    ])
}

fn default_persona_roles() -> Vec<String> {
    strings(&[
        "customer", "user", "admin", "manager", "student", "teacher", "doctor", "patient", "buyer",
        "seller", "driver", "rider",
    ])
}

/// Technology names in their canonical spelling (case preserved).
fn default_tech_names() -> Vec<String> {
    strings(&[
        "React",
        "Angular",
        "Vue",
        "Python",
        "Java",
        "Node.js",
        "MongoDB",
        "PostgreSQL",
        "MySQL",
        "AWS",
        "Azure",
        "Docker",
        "Kubernetes",
    ])
}

fn default_entity_stop_words() -> Vec<String> {
    strings(&[
        "user",
        "users",
        "system",
        "application",
        "feature",
        "function",
        "requirement",
        "specification",
        "document",
        "section",
        "page",
        "overview",
        "summary",
        "introduction",
        "conclusion",
        "maintain",
        "maintains",
        "reflect",
        "reflects",
        "working",
        "adjustment",
        "metric",
        "metrics",
        "process",
        "method",
        "approach",
        "strategy",
        "concept",
        "principle",
        "aspect",
        "factor",
        "load",
    ])
}

fn default_months() -> Vec<String> {
    strings(&[
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ])
}

fn default_error_terms() -> Vec<String> {
    strings(&[
        "corrupted",
        "malformed",
        "invalid",
        "error",
        "warning",
        "failed",
        "missing",
    ])
}

fn default_ui_generic_words() -> Vec<String> {
    strings(&[
        "widget", "control", "button", "label", "input", "field", "form", "panel", "dialog",
    ])
}

/// Verb and abstract-noun endings that disqualify a data-entity candidate.
fn default_entity_suffixes() -> Vec<String> {
    strings(&[
        "ing", "tion", "ment", "ance", "ence", "ness", "ship", "ity", "age", "ism", "ed", "ate",
    ])
}

fn default_security_terms() -> Vec<String> {
    strings(&[
        "authentication",
        "authorization",
        "encryption",
        "data protection",
        "two-factor",
        "audit log",
        "compliance",
    ])
}

fn default_screen_keywords() -> Vec<String> {
    strings(&[
        "login",
        "signup",
        "home",
        "dashboard",
        "profile",
        "cart",
        "checkout",
        "menu",
        "search",
        "settings",
        "booking",
        "payment",
    ])
}

fn default_capability_keywords() -> Vec<String> {
    strings(&[
        "search",
        "filter",
        "payment",
        "notification",
        "chat",
        "map",
        "calendar",
        "upload",
        "analytics",
    ])
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Lexicon {
    /// Case-insensitive regexes for explicit name labels; capture group 1 is the name.
    #[serde(default = "default_name_label_patterns")]
    pub name_label_patterns: Vec<String>,
    /// A labeled name containing any of these (substring) is rejected.
    #[serde(default = "default_name_reject_fragments")]
    pub name_reject_fragments: Vec<String>,
    /// Lines containing any of these are never treated as a title.
    #[serde(default = "default_title_metadata_markers")]
    pub title_metadata_markers: Vec<String>,
    /// A cleaned title line containing any of these (substring) is rejected.
    #[serde(default = "default_title_reject_fragments")]
    pub title_reject_fragments: Vec<String>,
    /// A compound-word name containing any of these (substring) is rejected.
    #[serde(default = "default_compound_stop_fragments")]
    pub compound_stop_fragments: Vec<String>,
    #[serde(default = "default_frequency_skip_words")]
    pub frequency_skip_words: Vec<String>,
    #[serde(default = "default_domain_stop_words")]
    pub domain_stop_words: Vec<String>,
    /// Phrases marking a line as a document heading rather than app content.
    #[serde(default = "default_heading_blacklist")]
    pub heading_blacklist: Vec<String>,
    #[serde(default = "default_persona_roles")]
    pub persona_roles: Vec<String>,
    #[serde(default = "default_tech_names")]
    pub tech_names: Vec<String>,
    #[serde(default = "default_entity_stop_words")]
    pub entity_stop_words: Vec<String>,
    #[serde(default = "default_months")]
    pub months: Vec<String>,
    #[serde(default = "default_error_terms")]
    pub error_terms: Vec<String>,
    #[serde(default = "default_ui_generic_words")]
    pub ui_generic_words: Vec<String>,
    #[serde(default = "default_entity_suffixes")]
    pub entity_suffixes: Vec<String>,
    #[serde(default = "default_security_terms")]
    pub security_terms: Vec<String>,
    #[serde(default = "default_screen_keywords")]
    pub screen_keywords: Vec<String>,
    #[serde(default = "default_capability_keywords")]
    pub capability_keywords: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            name_label_patterns: default_name_label_patterns(),
            name_reject_fragments: default_name_reject_fragments(),
            title_metadata_markers: default_title_metadata_markers(),
            title_reject_fragments: default_title_reject_fragments(),
            compound_stop_fragments: default_compound_stop_fragments(),
            frequency_skip_words: default_frequency_skip_words(),
            domain_stop_words: default_domain_stop_words(),
            heading_blacklist: default_heading_blacklist(),
            persona_roles: default_persona_roles(),
            tech_names: default_tech_names(),
            entity_stop_words: default_entity_stop_words(),
            months: default_months(),
            error_terms: default_error_terms(),
            ui_generic_words: default_ui_generic_words(),
            entity_suffixes: default_entity_suffixes(),
            security_terms: default_security_terms(),
            screen_keywords: default_screen_keywords(),
            capability_keywords: default_capability_keywords(),
        }
    }
}

impl Lexicon {
    /// Whether `word` (compared lowercase) is a domain stop word.
    #[must_use]
    pub fn is_domain_stop_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.domain_stop_words.iter().any(|stop| *stop == lower)
    }

    /// Whether `candidate` fails the data-entity filter: stop words, months,
    /// error terms, generic UI widget names, length under 4, or a blacklisted
    /// ending.
    #[must_use]
    pub fn rejects_entity(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        let listed = |list: &[String]| list.iter().any(|word| *word == lower);
        listed(&self.entity_stop_words)
            || listed(&self.months)
            || listed(&self.error_terms)
            || listed(&self.ui_generic_words)
            || lower.chars().count() < 4
            || self
                .entity_suffixes
                .iter()
                .any(|suffix| lower.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.name_label_patterns.len(), 8);
        assert_eq!(lexicon.months.len(), 12);
        assert_eq!(lexicon.entity_suffixes.len(), 12);
        assert!(lexicon.tech_names.contains(&"Node.js".to_string()));
    }

    #[test]
    fn domain_stop_words_compare_lowercase() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_domain_stop_word("System"));
        assert!(!lexicon.is_domain_stop_word("recipe"));
    }

    #[test]
    fn entity_filter_rejects_listed_and_suffixed_words() {
        let lexicon = Lexicon::default();
        for word in ["March", "Invalid", "Button", "Booking", "Created", "Load", "Cat"] {
            assert!(lexicon.rejects_entity(word), "{word} should be rejected");
        }
        for word in ["Recipe", "Invoice", "Patient", "ShoppingCart"] {
            assert!(!lexicon.rejects_entity(word), "{word} should be kept");
        }
    }
}
