//! Structured content: features, workflows, personas, tech specs, data
//! entities and security notes.

use dsk_config::{Lexicon, LimitsConfig};
use regex::Regex;

use crate::error::{ExtractError, compile};
use crate::text::{
    char_len, collapse_whitespace, contains_any, is_all_caps, push_unique, title_case,
};

/// Content lists before defaults are applied. Any list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredContent {
    pub features: Vec<String>,
    pub workflows: Vec<String>,
    pub personas: Vec<String>,
    pub tech_specs: Vec<String>,
    pub data_entities: Vec<String>,
    pub security_notes: Vec<String>,
}

pub(crate) struct ContentPatterns {
    bullet: Regex,
    numbered: Regex,
    modal: Regex,
    persona_phrase: Regex,
    persona_role: Option<Regex>,
    tech_name: Option<Regex>,
    tech_phrase: Regex,
    article_noun: Regex,
    camel_case: Regex,
    feature_word: Regex,
    security_term: Option<Regex>,
}

/// Case-insensitive whole-word alternation over `terms`, or `None` for an
/// empty list.
fn alternation(
    terms: &[String],
    escape: fn(&str) -> String,
) -> Result<Option<Regex>, ExtractError> {
    if terms.is_empty() {
        return Ok(None);
    }
    let alternatives = terms.iter().map(|term| escape(term)).collect::<Vec<_>>();
    compile(&format!(r"(?i)\b({})\b", alternatives.join("|"))).map(Some)
}

/// `.` in a technology name is optional (`Node.js` also matches `NodeJS`).
fn tech_escape(name: &str) -> String {
    regex::escape(name).replace(r"\.", r"\.?")
}

fn tech_key(name: &str) -> String {
    name.to_lowercase().replace('.', "")
}

impl ContentPatterns {
    pub(crate) fn compile(lexicon: &Lexicon) -> Result<Self, ExtractError> {
        let persona_role = if lexicon.persona_roles.is_empty() {
            None
        } else {
            let roles = lexicon
                .persona_roles
                .iter()
                .map(|role| regex::escape(role))
                .collect::<Vec<_>>();
            Some(compile(&format!(r"(?i)\b({})s?\b", roles.join("|")))?)
        };

        Ok(Self {
            bullet: compile(r"^[•\-\*]\s+(.+)")?,
            numbered: compile(r"^\d+[\.\)]\s+(.+)")?,
            modal: compile(r"(?i)\b(can|will|should|able to|allows|enables)\b")?,
            persona_phrase: compile(r"(?i)\bas\s+an?\s+([a-z]+(?:\s+[a-z]+){0,2})")?,
            persona_role,
            tech_name: alternation(&lexicon.tech_names, tech_escape)?,
            tech_phrase: compile(
                r"(?i:using|built with|powered by|based on)\s+([A-Z][a-zA-Z ]{3,25})",
            )?,
            article_noun: compile(r"\b(?:the|a|an)\s+([a-z]{4,15})\b")?,
            camel_case: compile(r"\b([A-Z][a-z]+(?:[A-Z][a-z]+)+)\b")?,
            feature_word: compile(r"\b([A-Z][a-z]{4,12})\b")?,
            security_term: alternation(&lexicon.security_terms, regex::escape)?,
        })
    }

    pub(crate) fn extract(
        &self,
        lexicon: &Lexicon,
        limits: &LimitsConfig,
        text: &str,
    ) -> StructuredContent {
        let (mut features, mut workflows) = self.items(lexicon, text);
        let mut data_entities = self.entities(lexicon, text, &features);
        let mut personas = self.personas(text);
        let mut tech_specs = self.tech_specs(lexicon, text);
        let mut security_notes = self.security_notes(text);

        features.truncate(limits.features);
        workflows.truncate(limits.workflows);
        personas.truncate(limits.personas);
        tech_specs.truncate(limits.tech_specs);
        data_entities.truncate(limits.data_entities);
        security_notes.truncate(limits.security_notes);

        StructuredContent {
            features,
            workflows,
            personas,
            tech_specs,
            data_entities,
            security_notes,
        }
    }

    /// Document headings: all-caps lines, lines ending in `:`, and lines
    /// naming a blacklisted section.
    fn is_heading(lexicon: &Lexicon, line: &str) -> bool {
        is_all_caps(line)
            || line.ends_with(':')
            || contains_any(&line.to_lowercase(), &lexicon.heading_blacklist)
    }

    /// Bullets and modal sentences become features; numbered items become
    /// workflows.
    fn items(&self, lexicon: &Lexicon, text: &str) -> (Vec<String>, Vec<String>) {
        let mut features = Vec::new();
        let mut workflows = Vec::new();
        let is_item =
            |content: &str| char_len(content) > 10 && !Self::is_heading(lexicon, content);

        for line in text.lines().map(str::trim) {
            if char_len(line) < 10 || Self::is_heading(lexicon, line) {
                continue;
            }
            if let Some(rest) = self.bullet.captures(line).and_then(|c| c.get(1)) {
                let content = rest.as_str().trim();
                if is_item(content) {
                    features.push(content.to_string());
                }
            } else if let Some(rest) = self.numbered.captures(line).and_then(|c| c.get(1)) {
                let content = rest.as_str().trim();
                if is_item(content) {
                    workflows.push(content.to_string());
                }
            } else if self.modal.is_match(line) && char_len(line) > 15 {
                features.push(line.to_string());
            }
        }
        (features, workflows)
    }

    fn personas(&self, text: &str) -> Vec<String> {
        let mut personas = Vec::new();
        let phrases = self
            .persona_phrase
            .captures_iter(text)
            .filter_map(|c| c.get(1));
        let roles = self
            .persona_role
            .iter()
            .flat_map(move |regex| regex.captures_iter(text).filter_map(|c| c.get(1)));
        for found in phrases.chain(roles) {
            let persona = found.as_str().trim();
            if char_len(persona) > 2 {
                push_unique(&mut personas, title_case(&collapse_whitespace(persona)));
            }
        }
        personas
    }

    fn tech_specs(&self, lexicon: &Lexicon, text: &str) -> Vec<String> {
        let mut specs = Vec::new();
        if let Some(regex) = &self.tech_name {
            for found in regex.captures_iter(text).filter_map(|c| c.get(1)) {
                let key = tech_key(found.as_str());
                let canonical = lexicon
                    .tech_names
                    .iter()
                    .find(|name| tech_key(name) == key)
                    .map_or_else(|| found.as_str().to_string(), Clone::clone);
                push_unique(&mut specs, canonical);
            }
        }
        for found in self.tech_phrase.captures_iter(text).filter_map(|c| c.get(1)) {
            let phrase = found.as_str().trim();
            if char_len(phrase) > 2 {
                push_unique(&mut specs, phrase.to_string());
            }
        }
        specs
    }

    fn entities(&self, lexicon: &Lexicon, text: &str, features: &[String]) -> Vec<String> {
        let mut entities = Vec::new();
        let lower = text.to_lowercase();
        let nouns = self
            .article_noun
            .captures_iter(&lower)
            .filter_map(|c| c.get(1))
            .map(|m| title_case(m.as_str()));
        let camel = self
            .camel_case
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        for candidate in nouns.chain(camel) {
            if !lexicon.rejects_entity(&candidate) {
                push_unique(&mut entities, candidate);
            }
        }

        if entities.is_empty() {
            for feature in features.iter().take(3) {
                let words = self
                    .feature_word
                    .captures_iter(feature)
                    .filter_map(|c| c.get(1))
                    .take(2);
                for word in words {
                    if !lexicon.rejects_entity(word.as_str()) {
                        push_unique(&mut entities, word.as_str().to_string());
                    }
                }
            }
        }
        entities
    }

    fn security_notes(&self, text: &str) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(regex) = &self.security_term {
            for found in regex.captures_iter(text).filter_map(|c| c.get(1)) {
                push_unique(&mut notes, title_case(&found.as_str().to_lowercase()));
            }
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> StructuredContent {
        let lexicon = Lexicon::default();
        ContentPatterns::compile(&lexicon)
            .unwrap()
            .extract(&lexicon, &LimitsConfig::default(), text)
    }

    #[test]
    fn bullets_become_features() {
        let content = extract("- Scan documents\n- Export reports\n- Share results");
        assert_eq!(
            content.features,
            vec!["Scan documents", "Export reports", "Share results"]
        );
        assert!(content.workflows.is_empty());
    }

    #[test]
    fn numbered_items_become_workflows() {
        let content = extract("1. Open the camera\n2) Capture the receipt page");
        assert_eq!(
            content.workflows,
            vec!["Open the camera", "Capture the receipt page"]
        );
    }

    #[test]
    fn headings_and_short_lines_are_skipped() {
        let content = extract("FEATURE LIST\nRequirements:\n- Short one\n* Technical specs overview");
        assert!(content.features.is_empty(), "{:?}", content.features);
    }

    #[test]
    fn modal_sentences_are_features() {
        let content = extract("Users can save favourite recipes offline");
        assert_eq!(content.features, vec!["Users can save favourite recipes offline"]);
    }

    #[test]
    fn personas_from_phrases_and_roles() {
        let content = extract("As a home cook I plan meals. Every customer and two drivers.");
        assert_eq!(content.personas, vec!["Home Cook I", "Customer", "Driver"]);
    }

    #[test]
    fn tech_names_keep_lexicon_spelling() {
        let content = extract("Backend on nodejs with postgresql, built with Tailwind");
        assert_eq!(content.tech_specs, vec!["Node.js", "PostgreSQL", "Tailwind"]);
    }

    #[test]
    fn entities_are_filtered() {
        let content = extract("Store the recipe and the invoice in March. The working button.");
        assert_eq!(content.data_entities, vec!["Recipe", "Invoice"]);
    }

    #[test]
    fn entity_fallback_uses_feature_words() {
        let content = extract("- Export Receipts quickly\n- Print Labels for Parcels");
        assert_eq!(content.data_entities, vec!["Export", "Receipts", "Print", "Labels"]);
    }

    #[test]
    fn security_terms_are_title_cased() {
        let content = extract("Requires Two-Factor login and data protection at rest.");
        assert_eq!(content.security_notes, vec!["Two-Factor", "Data Protection"]);
    }

    #[test]
    fn lists_respect_caps() {
        let text = (0..20)
            .map(|i| format!("- Feature number {i} does things"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract(&text).features.len(), 8);
    }
}
