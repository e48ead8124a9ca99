use crate::cli::GlobalFlags;
use crate::cli::root_commands::DesignArgs;
use crate::commands::shared::load_document;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dsk report`.
pub fn handle(args: &DesignArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (_, analysis) = load_document(&args.input, ctx)?;
    let mut engine = ctx.engine(args.seed, &analysis.project_name);
    let report = engine.report(&analysis);
    output(&report, flags.format)
}
