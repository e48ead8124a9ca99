//! Screen-section and capability keywords mentioned by a document.

use dsk_config::Lexicon;

use crate::text::title_case;

/// Screen keywords the text mentions, title-cased, in lexicon order.
pub(crate) fn sections(lexicon: &Lexicon, text: &str, cap: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    lexicon
        .screen_keywords
        .iter()
        .filter(|keyword| lower.contains(keyword.as_str()))
        .map(|keyword| title_case(keyword))
        .take(cap)
        .collect()
}

/// Capability keywords the text mentions, lowercase, in lexicon order.
pub(crate) fn capabilities(lexicon: &Lexicon, text: &str, cap: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    lexicon
        .capability_keywords
        .iter()
        .filter(|keyword| lower.contains(keyword.as_str()))
        .take(cap)
        .cloned()
        .collect()
}
