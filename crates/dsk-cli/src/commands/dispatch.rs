use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags),
        Commands::Palette(args) => commands::palette::handle(&args, ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::Prompt(args) => commands::prompt::handle(&args, ctx, flags),
        Commands::Handoff(args) => commands::handoff::handle(&args, ctx, flags),
    }
}
