//! Small string helpers shared by the extraction strategies.

use std::collections::HashMap;

/// The first `max_chars` characters of `text` (char-boundary safe).
pub(crate) fn prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
///
/// Any non-letter (digit, apostrophe, hyphen) starts a new run, so
/// `"two-factor"` becomes `"Two-Factor"` and `"docSketch"` becomes `"Docsketch"`.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Every cased run starts with exactly one uppercase letter, and there is at
/// least one cased letter.
pub(crate) fn is_title_cased(text: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

/// At least one cased letter and no lowercase letters.
pub(crate) fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `haystack` contains any of `needles` as a substring.
pub(crate) fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Push `item` unless an equal item is already present.
pub(crate) fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Frequency tally that remembers first-seen order for tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, word: String) {
        if let Some(&slot) = self.index.get(&word) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(word.clone(), self.counts.len());
            self.counts.push((word, 1));
        }
    }

    /// Most frequent entry; ties go to the entry seen first.
    pub(crate) fn most_common(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.is_none_or(|current| entry.1 > current.1) {
                best = Some(entry);
            }
        }
        best.map(|(word, _)| word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(prefix("héllo", 2), "hé");
        assert_eq!(prefix("abc", 10), "abc");
        assert_eq!(prefix("", 5), "");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("recipe KEEPER"), "Recipe Keeper");
        assert_eq!(title_case("two-factor"), "Two-Factor");
        assert_eq!(title_case("DocSketch"), "Docsketch");
        assert_eq!(title_case("3d printer"), "3D Printer");
    }

    #[test]
    fn title_cased_detection() {
        assert!(is_title_cased("Recipe Keeper"));
        assert!(is_title_cased("Recipe & Meal Planner 2"));
        assert!(!is_title_cased("Recipe keeper"));
        assert!(!is_title_cased("RECIPE"));
        assert!(!is_title_cased("1234"));
    }

    #[test]
    fn all_caps_detection() {
        assert!(is_all_caps("OVERVIEW"));
        assert!(is_all_caps("SECTION 2:"));
        assert!(!is_all_caps("Overview"));
        assert!(!is_all_caps("2024"));
    }

    #[test]
    fn tally_breaks_ties_by_first_seen() {
        let mut tally = Tally::default();
        for word in ["beta", "alpha", "alpha", "beta", "gamma"] {
            tally.add(word.to_string());
        }
        assert_eq!(tally.most_common(), Some("beta"));

        tally.add("alpha".to_string());
        assert_eq!(tally.most_common(), Some("alpha"));
        assert_eq!(Tally::default().most_common(), None);
    }
}
