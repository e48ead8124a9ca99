use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use dsk_config::DskConfig;
use dsk_design::{DesignEngine, DesignSeed};
use dsk_extract::SignalExtractor;

/// Per-invocation state shared by command handlers.
pub struct AppContext {
    pub config: DskConfig,
    pub extractor: SignalExtractor,
}

impl AppContext {
    /// Compile the extractor from the configured lexicon and limits.
    pub fn init(config: DskConfig) -> anyhow::Result<Self> {
        let extractor = SignalExtractor::new(config.lexicon.clone(), config.limits.clone())
            .context("failed to compile extraction patterns from the configured lexicon")?;
        Ok(Self { config, extractor })
    }

    /// A design engine for one run: fixed seed if given, otherwise derived
    /// from `identity` and the clock.
    #[must_use]
    pub fn engine(&self, seed: Option<u64>, identity: &str) -> DesignEngine {
        let config = self.config.design.clone();
        let engine = match seed {
            Some(value) => DesignEngine::new(DesignSeed::from_u64(value), config),
            None => DesignEngine::for_identity(identity, config),
        };
        tracing::debug!(seed = engine.seed().value(), identity, "design seed");
        engine
    }

    /// Local wall-clock time used for design-file names.
    #[must_use]
    pub fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }
}
