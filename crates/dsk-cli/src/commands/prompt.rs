use dsk_design::prompt::build_prompt;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DesignArgs;
use crate::commands::shared::load_document;
use crate::context::AppContext;
use crate::output::output_text;

/// Handle `dsk prompt`.
pub fn handle(args: &DesignArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (text, analysis) = load_document(&args.input, ctx)?;
    let mut engine = ctx.engine(args.seed, &analysis.project_name);
    let directives = ctx.extractor.color_directives(&text, engine.rng_mut());
    let prompt = build_prompt(&analysis, &directives, &text);
    output_text("prompt", &prompt, flags.format)
}
