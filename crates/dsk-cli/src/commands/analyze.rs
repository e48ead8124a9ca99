use crate::cli::GlobalFlags;
use crate::cli::root_commands::InputArgs;
use crate::commands::shared::load_document;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dsk analyze`.
pub fn handle(args: &InputArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (_, analysis) = load_document(args, ctx)?;
    output(&analysis, flags.format)
}
