//! # dsk-config
//!
//! Layered configuration loading for docsketch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCSKETCH_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`dsk --config <path>`)
//! 3. Project-level `.docsketch/config.toml`
//! 4. User-level `~/.config/docsketch/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCSKETCH_LIMITS__FEATURES` -> `limits.features`,
//! `DOCSKETCH_GENERAL__FALLBACK_TEXT` -> `general.fallback_text`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dsk_config::DskConfig;
//!
//! let config = DskConfig::load_with_dotenv().expect("config");
//! assert!(!config.lexicon.domain_stop_words.is_empty());
//! ```

mod design;
mod error;
mod general;
mod lexicon;
mod limits;

pub use design::DesignConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use lexicon::Lexicon;
pub use limits::LimitsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lexicon: Lexicon,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub design: DesignConfig,
}

impl DskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the
    /// project-level file and below the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::extract(Self::figment(Some(path)))
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".docsketch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Caller-supplied file
        if let Some(path) = extra_file {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOCSKETCH_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docsketch").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if absent.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DskConfig::default();
        assert_eq!(config.limits.features, 8);
        assert_eq!(config.lexicon.persona_roles.len(), 12);
        assert_eq!(config.design.component_catalogue.len(), 8);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = DskConfig::figment(None);
        let config: DskConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.limits.workflows, 6);
        assert_eq!(
            config.general.fallback_text,
            "Create a modern mobile application"
        );
    }
}
