//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use dsk_config::DskConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_lexicon_lists_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[lexicon]
persona_roles = ["chef", "diner"]
tech_names = ["Svelte", "SQLite"]
"#,
        )?;

        let config: DskConfig = Figment::from(Serialized::defaults(DskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.lexicon.persona_roles, vec!["chef", "diner"]);
        assert_eq!(config.lexicon.tech_names, vec!["Svelte", "SQLite"]);
        // Lists not named in the file keep their defaults
        assert_eq!(config.lexicon.months.len(), 12);
        Ok(())
    });
}

#[test]
fn loads_limits_and_design_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[limits]
features = 4

[design]
component_catalogue = ["gradient_banner", "section_heading"]

[design.typography]
body = "Roboto 400"
"#,
        )?;

        let config: DskConfig = Figment::from(Serialized::defaults(DskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.limits.features, 4);
        assert_eq!(config.limits.personas, 6);
        assert_eq!(
            config.design.component_catalogue,
            vec!["gradient_banner", "section_heading"]
        );
        assert_eq!(config.design.typography["body"], "Roboto 400");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".docsketch")?;
        jail.create_file(
            ".docsketch/config.toml",
            r#"
[general]
fallback_text = "Create a recipe app"
"#,
        )?;

        let config = DskConfig::load().expect("config loads");
        assert_eq!(config.general.fallback_text, "Create a recipe app");
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".docsketch")?;
        jail.create_file(
            ".docsketch/config.toml",
            r"
[limits]
workflows = 2
",
        )?;
        jail.create_file(
            "override.toml",
            r"
[limits]
workflows = 3
",
        )?;

        let config =
            DskConfig::load_with_file(std::path::Path::new("override.toml")).expect("loads");
        assert_eq!(config.limits.workflows, 3);
        Ok(())
    });
}

#[test]
fn zero_limit_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCSKETCH_LIMITS__FEATURES", "0");

        let result = DskConfig::load();
        assert!(result.is_err(), "a zero feature cap should be rejected");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCSKETCH_LIMITS__PERSONAS", "2");

        jail.create_file(
            "config.toml",
            r"
[limits]
personas = 5
tech_specs = 4
",
        )?;

        let config: DskConfig = Figment::from(Serialized::defaults(DskConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("DOCSKETCH_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.limits.personas, 2);
        // TOML value not overridden by env should remain
        assert_eq!(config.limits.tech_specs, 4);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCSKETCH_LIMITS__FEATURESS", "1");

        let config: DskConfig = Figment::from(Serialized::defaults(DskConfig::default()))
            .merge(Env::prefixed("DOCSKETCH_").split("__"))
            .extract()?;

        assert_eq!(config.limits.features, 8);
        Ok(())
    });
}
