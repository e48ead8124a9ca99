use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract the content analysis from a document.
    Analyze(InputArgs),
    /// Draw a harmony palette.
    Palette(SeedArgs),
    /// Generate the design report for a document.
    Report(DesignArgs),
    /// Build the drafting prompt for a document.
    Prompt(DesignArgs),
    /// Prepare the full hand-off bundle: report, prompt and design-file name.
    Handoff(HandoffArgs),
}

/// Document input. Reads stdin when no path is given or the path is `-`.
#[derive(Clone, Debug, Default, Args)]
pub struct InputArgs {
    /// Path to the requirements document
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct SeedArgs {
    /// Fixed design seed (defaults to a time-derived seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Identity mixed into a time-derived seed
    #[arg(long, default_value = "docsketch")]
    pub identity: String,
}

#[derive(Clone, Debug, Default, Args)]
pub struct DesignArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Fixed design seed (defaults to one derived from the project name and time)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct HandoffArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    /// JSON file holding a drafted UI spec to merge into the report
    #[arg(long)]
    pub draft: Option<PathBuf>,
}
