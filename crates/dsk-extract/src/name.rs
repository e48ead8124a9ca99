//! Project-name inference.
//!
//! Names are chosen by an ordered cascade of strategies; the first one that
//! yields an acceptable candidate wins. The last strategy always produces a
//! name, so the cascade is total.

use chrono::Local;
use dsk_config::Lexicon;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{ExtractError, compile};
use crate::text::{
    char_len, collapse_whitespace, contains_any, is_all_caps, is_title_cased, prefix, title_case,
};

/// A domain dictionary: trigger keywords plus candidate patterns.
struct DictionarySource {
    triggers: &'static [&'static str],
    patterns: &'static [&'static str],
}

const DICTIONARIES: [DictionarySource; 6] = [
    DictionarySource {
        triggers: &["calculator"],
        patterns: &[
            r"([A-Za-z]+\s*Calculator)",
            r"([A-Za-z]+\s*Math\s*[A-Za-z]*)",
            r"(Scientific\s*[A-Za-z]*)",
            r"(Advanced\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Computation\s*[A-Za-z]*)",
        ],
    },
    DictionarySource {
        triggers: &["chat"],
        patterns: &[
            r"([A-Za-z]+\s*(?:Chat|Messenger|Message))",
            r"([A-Za-z]+\s*Communication)",
            r"(Instant\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Talk\s*[A-Za-z]*)",
        ],
    },
    DictionarySource {
        triggers: &["ecommerce", "shop"],
        patterns: &[
            r"([A-Za-z]+\s*(?:Shop|Store|Market))",
            r"([A-Za-z]+\s*Commerce)",
            r"([A-Za-z]+\s*Retail)",
            r"(Online\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Buy\s*[A-Za-z]*)",
        ],
    },
    DictionarySource {
        triggers: &["banking"],
        patterns: &[
            r"([A-Za-z]+\s*(?:Bank|Finance|Pay))",
            r"([A-Za-z]+\s*Wallet)",
            r"([A-Za-z]+\s*Transaction)",
            r"(Digital\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Money\s*[A-Za-z]*)",
        ],
    },
    DictionarySource {
        triggers: &["health"],
        patterns: &[
            r"([A-Za-z]+\s*(?:Health|Medical|Care))",
            r"([A-Za-z]+\s*Doctor)",
            r"([A-Za-z]+\s*Patient)",
            r"(Medical\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Clinic\s*[A-Za-z]*)",
        ],
    },
    DictionarySource {
        triggers: &["food"],
        patterns: &[
            r"([A-Za-z]+\s*(?:Food|Restaurant|Recipe))",
            r"([A-Za-z]+\s*Kitchen)",
            r"([A-Za-z]+\s*Delivery)",
            r"(Fresh\s*[A-Za-z]*)",
            r"([A-Za-z]*\s*Meal\s*[A-Za-z]*)",
        ],
    },
];

const COMPOUND_PATTERNS: [&str; 3] = [
    r"\b([A-Z][a-z]+(?:[A-Z][a-z]+)+)\b",
    r"\b([A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b",
    r"\b([A-Za-z]+[-_][A-Za-z]+)\b",
];

struct Dictionary {
    triggers: &'static [&'static str],
    patterns: Vec<Regex>,
}

type Strategy = fn(&NamePatterns, &Lexicon, &str) -> Option<String>;

/// Strategies in priority order. The terminal fallback is not listed; it
/// runs when every strategy here declines.
const STRATEGIES: [(&str, Strategy); 5] = [
    ("explicit_label", NamePatterns::explicit_label),
    ("title_line", NamePatterns::title_line),
    ("domain_dictionary", NamePatterns::domain_dictionary),
    ("compound_word", NamePatterns::compound_word),
    ("capitalized_frequency", NamePatterns::capitalized_frequency),
];

/// Compiled patterns for the naming cascade.
pub(crate) struct NamePatterns {
    labels: Vec<Regex>,
    title_shape: Regex,
    title_noise: Regex,
    dictionaries: Vec<Dictionary>,
    compounds: Vec<Regex>,
    capitalized: Regex,
    content_word: Regex,
}

impl NamePatterns {
    /// Compile the lexicon's label patterns and the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if a label pattern fails to compile or has no
    /// capture group.
    pub(crate) fn compile(lexicon: &Lexicon) -> Result<Self, ExtractError> {
        let labels = lexicon
            .name_label_patterns
            .iter()
            .map(|pattern| {
                let regex = compile(&format!("(?i){pattern}"))?;
                if regex.captures_len() < 2 {
                    return Err(ExtractError::MissingCaptureGroup(pattern.clone()));
                }
                Ok(regex)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let dictionaries = DICTIONARIES
            .iter()
            .map(|source| {
                Ok(Dictionary {
                    triggers: source.triggers,
                    patterns: source
                        .patterns
                        .iter()
                        .map(|pattern| compile(&format!("(?i){pattern}")))
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self {
            labels,
            title_shape: compile(r"^[A-Z][a-zA-Z0-9\s&-]+$")?,
            title_noise: compile(r"[^A-Za-z0-9\s&-]")?,
            dictionaries,
            compounds: COMPOUND_PATTERNS
                .iter()
                .map(|pattern| compile(pattern))
                .collect::<Result<Vec<_>, _>>()?,
            // Capital plus 2..=15 lowercase letters: words of 3 to 16 characters.
            capitalized: compile(r"\b[A-Z][a-z]{2,15}\b")?,
            content_word: compile(r"\b[a-zA-Z]{4,10}\b")?,
        })
    }

    /// Run the cascade. Never empty, never longer than 40 characters.
    pub(crate) fn infer(&self, lexicon: &Lexicon, text: &str) -> String {
        for (strategy, run) in STRATEGIES {
            if let Some(name) = run(self, lexicon, text) {
                tracing::debug!(strategy, %name, "project name inferred");
                return name;
            }
        }
        let stamp = Local::now().format("%m%d").to_string();
        self.terminal(text, &stamp)
    }

    fn explicit_label(&self, lexicon: &Lexicon, text: &str) -> Option<String> {
        let head = prefix(text, 1000);
        for regex in &self.labels {
            for captures in regex.captures_iter(head) {
                let Some(found) = captures.get(1) else {
                    continue;
                };
                let name = collapse_whitespace(&title_case(found.as_str().trim()));
                if (3..=35).contains(&char_len(&name))
                    && !contains_any(&name.to_lowercase(), &lexicon.name_reject_fragments)
                {
                    return Some(name);
                }
            }
        }
        None
    }

    fn title_line(&self, lexicon: &Lexicon, text: &str) -> Option<String> {
        let lines = text
            .lines()
            .take(50)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(15);

        for (index, line) in lines.enumerate() {
            if !(3..=50).contains(&char_len(line)) {
                continue;
            }
            if contains_any(&line.to_lowercase(), &lexicon.title_metadata_markers) {
                continue;
            }
            let looks_like_title = is_title_cased(line)
                || is_all_caps(line)
                || self.title_shape.is_match(line)
                || (index < 5 && line.split_whitespace().count() <= 6);
            if !looks_like_title {
                continue;
            }

            let cleaned = collapse_whitespace(&self.title_noise.replace_all(line, " "));
            if (3..=35).contains(&char_len(&cleaned))
                && !contains_any(&cleaned.to_lowercase(), &lexicon.title_reject_fragments)
            {
                return Some(title_case(&cleaned));
            }
        }
        None
    }

    fn domain_dictionary(&self, _lexicon: &Lexicon, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        let head = prefix(text, 800);
        for dictionary in &self.dictionaries {
            if !dictionary.triggers.iter().any(|trigger| lower.contains(trigger)) {
                continue;
            }
            for regex in &dictionary.patterns {
                // Only the first match of each pattern is considered.
                let Some(found) = regex.captures(head).and_then(|c| c.get(1)) else {
                    continue;
                };
                let name = collapse_whitespace(&title_case(found.as_str().trim()));
                if (3..=30).contains(&char_len(&name)) {
                    return Some(name);
                }
            }
        }
        None
    }

    fn compound_word(&self, lexicon: &Lexicon, text: &str) -> Option<String> {
        let head = prefix(text, 600);
        for regex in &self.compounds {
            for captures in regex.captures_iter(head) {
                let Some(found) = captures.get(1) else {
                    continue;
                };
                let name = title_case(&found.as_str().replace(['-', '_'], " "));
                if (3..=30).contains(&char_len(&name))
                    && !contains_any(&name.to_lowercase(), &lexicon.compound_stop_fragments)
                {
                    return Some(name);
                }
            }
        }
        None
    }

    fn capitalized_frequency(&self, lexicon: &Lexicon, text: &str) -> Option<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut words: Vec<&str> = Vec::new();
        for found in self.capitalized.find_iter(prefix(text, 500)) {
            let word = found.as_str();
            let lower = word.to_lowercase();
            if lexicon.frequency_skip_words.contains(&lower)
                || lower.ends_with("ing")
                || lower.ends_with("tion")
                || seen.contains(&lower)
            {
                continue;
            }
            seen.push(lower);
            words.push(word);
        }

        match words.as_slice() {
            [] => None,
            [word] => {
                let lower = text.to_lowercase();
                let mentions = |cues: &[&str]| cues.iter().any(|cue| lower.contains(cue));
                let suffix = if mentions(&["api", "service", "backend"]) {
                    "Service"
                } else if mentions(&["ui", "interface", "frontend"]) {
                    "Interface"
                } else if mentions(&["mobile", "app", "android", "ios"]) {
                    "App"
                } else {
                    "System"
                };
                Some(format!("{word} {suffix}"))
            }
            [first, second, ..] => [
                format!("{first} {second}"),
                format!("{first} App"),
                format!("{second} System"),
                format!("{first} Platform"),
            ]
            .into_iter()
            .find(|combo| char_len(combo) <= 30),
        }
    }

    /// Last resort: first content word plus a month-day stamp, or a content
    /// hash when the text has no usable word.
    fn terminal(&self, text: &str, stamp: &str) -> String {
        let head = prefix(text, 200);
        if let Some(word) = self.content_word.find(head) {
            return format!("{} App {stamp}", title_case(word.as_str()));
        }
        let digest = format!("{:x}", Sha256::digest(head.as_bytes()));
        format!("Project {}", digest[..6].to_uppercase())
    }
}

/// Name used when the extractor cannot be built at all.
pub(crate) fn emergency_name() -> String {
    let secs = chrono::Utc::now().timestamp().to_string();
    let tail = &secs[secs.len().saturating_sub(4)..];
    format!("App {tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn patterns() -> (NamePatterns, Lexicon) {
        let lexicon = Lexicon::default();
        (NamePatterns::compile(&lexicon).unwrap(), lexicon)
    }

    #[test]
    fn explicit_label_wins() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.infer(&lexicon, "Project Name: Recipe Keeper"),
            "Recipe Keeper"
        );
    }

    #[test]
    fn title_line_used_when_no_label() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.title_line(&lexicon, "RECIPE KEEPER\nkeeps recipes"),
            Some("Recipe Keeper".to_string())
        );
    }

    #[test]
    fn title_line_skips_metadata_lines() {
        let (patterns, lexicon) = patterns();
        assert_eq!(patterns.title_line(&lexicon, "Version 2.0 PDF\n"), None);
    }

    #[test]
    fn dictionary_requires_trigger_keyword() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.domain_dictionary(&lexicon, "scientific calculator for students"),
            Some("Scientific Calculator".to_string())
        );
        assert_eq!(patterns.domain_dictionary(&lexicon, "a garden planner"), None);
    }

    #[test]
    fn compound_word_splits_separators() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.compound_word(&lexicon, "we call it plant-pal today"),
            Some("Plant Pal".to_string())
        );
    }

    #[test]
    fn single_capitalized_word_gets_contextual_suffix() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.capitalized_frequency(&lexicon, "Gardenia exposes a backend api"),
            Some("Gardenia Service".to_string())
        );
        assert_eq!(
            patterns.capitalized_frequency(&lexicon, "Gardenia on mobile"),
            Some("Gardenia App".to_string())
        );
    }

    #[test]
    fn capitalized_words_are_capped_at_sixteen_characters() {
        let (patterns, lexicon) = patterns();
        assert_eq!(
            patterns.capitalized_frequency(&lexicon, "Photosynthesizer on mobile"),
            Some("Photosynthesizer App".to_string())
        );
        assert_eq!(
            patterns.capitalized_frequency(&lexicon, "Photosynthesizers on mobile"),
            None
        );
    }

    #[test]
    fn terminal_falls_back_to_hash() {
        let (patterns, _) = patterns();
        assert_eq!(patterns.terminal("grow plants", "0101"), "Grow App 0101");
        // SHA-256 of the empty string starts with e3b0c4
        assert_eq!(patterns.terminal("", "0101"), "Project E3B0C4");
    }

    #[test]
    fn label_pattern_without_group_is_rejected() {
        let lexicon = Lexicon {
            name_label_patterns: vec![r"Name:\s*\w+".to_string()],
            ..Lexicon::default()
        };
        assert!(matches!(
            NamePatterns::compile(&lexicon),
            Err(ExtractError::MissingCaptureGroup(_))
        ));
    }

    #[test]
    fn emergency_name_has_four_digit_tail() {
        let name = emergency_name();
        assert!(name.starts_with("App "));
        assert_eq!(name.len(), 8);
    }
}
