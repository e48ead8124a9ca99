//! Color directives: colors named by the document, or random ones.

use std::collections::BTreeMap;

use dsk_core::enums::{ColorRole, ColorSource};
use dsk_core::ColorDirectives;
use rand::Rng;
use regex::Regex;

use crate::error::{ExtractError, compile};

const HEX: &str = r"#[0-9A-Fa-f]{6}";

/// Labels that name each role, tried in order.
const ROLE_LABELS: [(ColorRole, &[&str]); 4] = [
    (ColorRole::Primary, &[r"primary", r"main\s*color", r"brand\s*color"]),
    (ColorRole::Secondary, &[r"secondary"]),
    (ColorRole::Accent, &[r"accent", r"highlight"]),
    (ColorRole::Background, &[r"background"]),
];

pub(crate) struct ColorPatterns {
    labeled: Vec<(ColorRole, Vec<Regex>)>,
    literal: Regex,
}

impl ColorPatterns {
    pub(crate) fn compile() -> Result<Self, ExtractError> {
        let labeled = ROLE_LABELS
            .iter()
            .map(|(role, labels)| {
                let patterns = labels
                    .iter()
                    .map(|label| compile(&format!(r"(?i){label}\s*:?\s*({HEX})")))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((*role, patterns))
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;
        Ok(Self {
            labeled,
            literal: compile(HEX)?,
        })
    }

    /// Colors the document states, keyed by role. Values are kept verbatim.
    ///
    /// Labeled values come first (first matching label per role). When fewer
    /// than three roles are labeled, bare hex literals not already used fill
    /// the open positional roles in text order.
    pub(crate) fn explicit(&self, text: &str) -> BTreeMap<ColorRole, String> {
        let mut found = BTreeMap::new();
        for (role, patterns) in &self.labeled {
            let first = patterns
                .iter()
                .find_map(|regex| regex.captures(text).and_then(|c| c.get(1)));
            if let Some(hex) = first {
                found.insert(*role, hex.as_str().to_string());
            }
        }

        if found.len() < 3 {
            let mut claimed: Vec<String> = found.values().map(|hex| hex.to_lowercase()).collect();
            let mut bare = self.literal.find_iter(text).filter_map(|m| {
                let lower = m.as_str().to_lowercase();
                if claimed.contains(&lower) {
                    None
                } else {
                    claimed.push(lower);
                    Some(m.as_str().to_string())
                }
            });
            for role in ColorRole::POSITIONAL {
                if found.contains_key(&role) {
                    continue;
                }
                match bare.next() {
                    Some(hex) => {
                        found.insert(role, hex);
                    }
                    None => break,
                }
            }
        }
        found
    }

    /// Document colors if any, otherwise three random uppercase colors.
    pub(crate) fn directives<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ColorDirectives {
        let colors = self.explicit(text);
        if !colors.is_empty() {
            return ColorDirectives {
                source: ColorSource::Document,
                colors,
            };
        }
        let colors = ColorRole::POSITIONAL
            .into_iter()
            .map(|role| {
                let [r, g, b] = rng.random::<[u8; 3]>();
                (role, format!("#{r:02X}{g:02X}{b:02X}"))
            })
            .collect();
        ColorDirectives {
            source: ColorSource::Generated,
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn explicit(text: &str) -> BTreeMap<ColorRole, String> {
        ColorPatterns::compile().unwrap().explicit(text)
    }

    #[test]
    fn labeled_roles_are_kept_verbatim() {
        let colors = explicit("primary: #112233 and accent: #445566");
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[&ColorRole::Primary], "#112233");
        assert_eq!(colors[&ColorRole::Accent], "#445566");
    }

    #[test]
    fn third_bare_literal_fills_secondary() {
        let colors = explicit("primary: #112233, accent: #445566, also #AbCdEf");
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[&ColorRole::Secondary], "#AbCdEf");
    }

    #[test]
    fn synonyms_map_to_roles() {
        let colors = explicit("Brand Color #0a0b0c, HIGHLIGHT: #0d0e0f, background #ffffff");
        assert_eq!(colors[&ColorRole::Primary], "#0a0b0c");
        assert_eq!(colors[&ColorRole::Accent], "#0d0e0f");
        assert_eq!(colors[&ColorRole::Background], "#ffffff");
        assert!(!colors.contains_key(&ColorRole::Secondary));
    }

    #[test]
    fn bare_literals_assign_positionally() {
        let colors = explicit("#111111 #222222 #333333 #444444");
        assert_eq!(colors[&ColorRole::Primary], "#111111");
        assert_eq!(colors[&ColorRole::Secondary], "#222222");
        assert_eq!(colors[&ColorRole::Accent], "#333333");
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn no_colors_generates_three() {
        let patterns = ColorPatterns::compile().unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let directives = patterns.directives("no colors here", &mut rng);
        assert_eq!(directives.source, ColorSource::Generated);
        assert_eq!(directives.colors.len(), 3);
        for hex in directives.colors.values() {
            assert!(dsk_core::design::is_hex_color(hex), "{hex}");
            assert_eq!(hex, &hex.to_uppercase());
        }
    }
}
