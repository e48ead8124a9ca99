//! Hand-off seam to the external drafting model and design tool.
//!
//! Neither collaborator is implemented here. Both sit behind traits so the
//! binary or an embedding service can plug in real clients; their failures
//! are logged and never reach the caller, who always keeps the
//! core-generated report.

use chrono::NaiveDateTime;
use dsk_core::{ColorDirectives, ContentAnalysis, Report};
use serde::Serialize;
use serde_json::Value;

use crate::error::DesignError;
use crate::naming::design_file_name;
use crate::prompt::build_prompt;
use crate::DesignEngine;

/// Creates a design file from a report and returns its identifier.
pub trait DesignFileClient {
    /// # Errors
    ///
    /// Returns [`DesignError::Collaborator`] when the design tool rejects the file.
    fn create_file(&self, name: &str, report: &Report) -> Result<String, DesignError>;
}

/// Drafts a UI specification from a prompt.
///
/// The draft is opaque JSON; only its `navigation_flow` and
/// `prototype_settings` members are read back into the report.
pub trait DraftingModel {
    /// # Errors
    ///
    /// Returns [`DesignError::Collaborator`] when the model call fails.
    fn draft(&self, prompt: &str) -> Result<Value, DesignError>;
}

/// Everything the collaborators need for one document.
#[derive(Debug, Clone, Serialize)]
pub struct HandOff {
    pub report: Report,
    pub directives: ColorDirectives,
    pub prompt: String,
    pub file_name: String,
}

impl HandOff {
    /// Generate the report, prompt and design-file name for a document.
    ///
    /// Draws from `engine` in a fixed order (report, then name), so a seeded
    /// engine reproduces the same hand-off.
    pub fn prepare(
        engine: &mut DesignEngine,
        analysis: &ContentAnalysis,
        directives: ColorDirectives,
        document_text: &str,
        at: NaiveDateTime,
    ) -> Self {
        let report = engine.report(analysis);
        let prompt = build_prompt(analysis, &directives, document_text);
        let file_name =
            design_file_name(&analysis.project_name, &analysis.domain, at, engine.rng_mut());
        Self {
            report,
            directives,
            prompt,
            file_name,
        }
    }

    /// Publish the report through `client`. `None` if the client failed.
    pub fn publish(&self, client: &dyn DesignFileClient) -> Option<String> {
        match client.create_file(&self.file_name, &self.report) {
            Ok(id) => {
                tracing::info!(file = %self.file_name, id = %id, "design file created");
                Some(id)
            }
            Err(error) => {
                tracing::warn!(%error, file = %self.file_name, "design file creation failed");
                None
            }
        }
    }

    /// Merge a model draft's navigation and prototype settings into the
    /// report. Returns whether a draft was applied.
    pub fn apply_draft(&mut self, model: &dyn DraftingModel) -> bool {
        let draft = match model.draft(&self.prompt) {
            Ok(draft) => draft,
            Err(error) => {
                tracing::warn!(%error, "drafting failed, keeping generated report");
                return false;
            }
        };

        if let Some(flow) = draft.get("navigation_flow") {
            self.report.navigation_flow = flow.clone();
        }
        if let Some(settings) = draft.get("prototype_settings") {
            self.report.prototype_settings = settings.clone();
        }
        true
    }
}
