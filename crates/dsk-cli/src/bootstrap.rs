use anyhow::Context;
use dsk_config::DskConfig;

use crate::cli::GlobalFlags;

/// Load configuration: defaults, user and project TOML, `--config`, then
/// `DOCSKETCH_*` environment (with `.env` support).
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DskConfig> {
    match &flags.config {
        Some(path) => DskConfig::load_with_file(path)
            .with_context(|| format!("failed to load config file {}", path.display())),
        None => DskConfig::load_with_dotenv().context("failed to load docsketch configuration"),
    }
}
