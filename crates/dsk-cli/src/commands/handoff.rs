use std::path::Path;

use dsk_design::{DesignError, DraftingModel, HandOff};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HandoffArgs;
use crate::commands::shared::load_document;
use crate::context::AppContext;
use crate::output::output;

/// Drafting model backed by a JSON file written ahead of time.
struct FileDraft<'a>(&'a Path);

impl FileDraft<'_> {
    fn failure(&self, message: impl std::fmt::Display) -> DesignError {
        DesignError::Collaborator {
            collaborator: "draft file",
            message: format!("{}: {message}", self.0.display()),
        }
    }
}

impl DraftingModel for FileDraft<'_> {
    fn draft(&self, _prompt: &str) -> Result<Value, DesignError> {
        let raw = std::fs::read_to_string(self.0).map_err(|error| self.failure(error))?;
        serde_json::from_str(&raw).map_err(|error| self.failure(error))
    }
}

/// Handle `dsk handoff`.
pub fn handle(args: &HandoffArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (text, analysis) = load_document(&args.design.input, ctx)?;
    let mut engine = ctx.engine(args.design.seed, &analysis.project_name);
    let directives = ctx.extractor.color_directives(&text, engine.rng_mut());
    let mut handoff = HandOff::prepare(
        &mut engine,
        &analysis,
        directives,
        &text,
        AppContext::now(),
    );

    if let Some(path) = args.draft.as_deref() {
        handoff.apply_draft(&FileDraft(path));
    }

    output(&handoff, flags.format)
}
