//! General application configuration.

use serde::{Deserialize, Serialize};

/// Text analyzed in place of a blank document.
fn default_fallback_text() -> String {
    String::from("Create a modern mobile application")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Substituted for input text that is empty or whitespace-only.
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fallback_text: default_fallback_text(),
        }
    }
}

impl GeneralConfig {
    /// Return `text`, or the fallback text when `text` is blank.
    #[must_use]
    pub fn effective_text<'a>(&'a self, text: &'a str) -> &'a str {
        if text.trim().is_empty() {
            &self.fallback_text
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.fallback_text, "Create a modern mobile application");
    }

    #[test]
    fn blank_text_uses_fallback() {
        let config = GeneralConfig::default();
        assert_eq!(config.effective_text("  \n\t"), config.fallback_text);
        assert_eq!(config.effective_text("Recipe app"), "Recipe app");
    }
}
