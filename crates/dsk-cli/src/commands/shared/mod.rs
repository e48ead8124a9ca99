pub mod input;

use dsk_core::ContentAnalysis;

use crate::cli::root_commands::InputArgs;
use crate::context::AppContext;

/// Read the document named by `args` and analyze it.
pub fn load_document(
    args: &InputArgs,
    ctx: &AppContext,
) -> anyhow::Result<(String, ContentAnalysis)> {
    let bytes = input::read_bytes(args)?;
    let raw = input::decode(&bytes);
    if raw.trim().is_empty() {
        tracing::info!("empty document, analyzing fallback text");
    }
    let text = ctx.config.general.effective_text(&raw).to_string();
    let analysis = ctx.extractor.analyze(&text);
    tracing::debug!(
        project = %analysis.project_name,
        domain = %analysis.domain,
        features = analysis.features.len(),
        "document analyzed"
    );
    Ok((text, analysis))
}
