use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dsk palette`.
pub fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut engine = ctx.engine(args.seed, &args.identity);
    let draw = engine.palette();
    output(&draw.to_json(), flags.format)
}
