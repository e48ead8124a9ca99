//! Domain classification: what the described application is about.

use dsk_config::Lexicon;
use regex::Regex;

use crate::error::{ExtractError, compile};
use crate::text::{Tally, char_len, prefix};

/// Domain returned when no candidate survives filtering.
pub const FALLBACK_DOMAIN: &str = "application";

pub(crate) struct DomainPatterns {
    product_noun: Regex,
    purpose: Regex,
    offering: Regex,
    action_object: Regex,
    long_word: Regex,
    title_product: Regex,
    noun: Regex,
}

impl DomainPatterns {
    pub(crate) fn compile() -> Result<Self, ExtractError> {
        Ok(Self {
            product_noun: compile(
                r"\b([a-z]+)\s+(?:app|application|platform|system|service|tool|portal|software)\b",
            )?,
            purpose: compile(r"\bfor\s+([a-z]+(?:\s+[a-z]+){0,2})\b")?,
            offering: compile(r"\b([a-z]+)\s+(?:management|solution|service)\b")?,
            action_object: compile(
                r"\b(?:book|order|buy|sell|track|manage|schedule|reserve|deliver|browse|search|chat|message|pay|transfer|learn|teach|diagnose|treat)\s+([a-z]+)\b",
            )?,
            long_word: compile(r"\b([a-z]{5,15})\b")?,
            title_product: compile(r"(?i)\b([A-Za-z]+)\s+(?:App|Application|Platform|System)")?,
            noun: compile(r"\b[a-z]{5,12}\b")?,
        })
    }

    /// Most frequent acceptable candidate, then the two fallbacks, then
    /// [`FALLBACK_DOMAIN`].
    pub(crate) fn classify(&self, lexicon: &Lexicon, text: &str) -> String {
        let lower = text.to_lowercase();
        let accept = |candidate: &str| {
            char_len(candidate) > 3
                && char_len(candidate) <= 30
                && !lexicon.is_domain_stop_word(candidate)
        };

        let haystack = lower.as_str();
        let mut tally = Tally::default();
        let captured = [
            &self.product_noun,
            &self.purpose,
            &self.offering,
            &self.action_object,
        ]
        .into_iter()
        .flat_map(move |regex| regex.captures_iter(haystack).filter_map(|c| c.get(1)))
        .chain(
            self.long_word
                .captures_iter(prefix(haystack, 500))
                .filter_map(|c| c.get(1)),
        );
        for found in captured {
            let candidate = found.as_str().trim();
            if accept(candidate) {
                tally.add(candidate.split_whitespace().collect::<Vec<_>>().join("_"));
            }
        }
        if let Some(top) = tally.most_common() {
            return top.to_string();
        }

        let lines = text
            .lines()
            .take(20)
            .map(str::trim)
            .filter(|line| !line.is_empty());
        for line in lines {
            if let Some(found) = self.title_product.captures(line).and_then(|c| c.get(1)) {
                let word = found.as_str().to_lowercase();
                if char_len(&word) <= 30 && !lexicon.is_domain_stop_word(&word) {
                    return word;
                }
            }
        }

        let mut nouns = Tally::default();
        for found in self.noun.find_iter(prefix(&lower, 1000)) {
            if !lexicon.is_domain_stop_word(found.as_str()) {
                nouns.add(found.as_str().to_string());
            }
        }
        nouns
            .most_common()
            .map_or_else(|| FALLBACK_DOMAIN.to_string(), ToString::to_string)
    }
}
