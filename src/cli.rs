use crate::model::InitMode;
use crate::util::parse_day;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MESSAGE: &str = "MATEJ";

#[derive(Parser)]
#[command(name = "gart")]
#[command(about = "Paint a message onto the git contribution graph with backdated commits")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(flatten)]
    pub paint: PaintArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Text to paint", default_value = DEFAULT_MESSAGE)]
    pub message: String,

    #[arg(long, value_parser = parse_day, help = "Pretend today is this date (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,

    #[arg(short, long, help = "Echo every git command instead of showing a progress bar")]
    pub verbose: bool,
}

#[derive(Args, Clone)]
pub struct PaintArgs {
    #[arg(long, help = "Branch to rebuild", default_value = "art")]
    pub branch: String,

    #[arg(long, help = "Tracked file, relative to the work tree", default_value = "art.txt")]
    pub file: PathBuf,

    #[arg(long, value_enum, help = "How to prepare the branch", default_value_t = InitMode::Orphan)]
    pub mode: InitMode,

    #[arg(long, help = "Host serving the target repository", default_value = "github.com")]
    pub host: String,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "Access token used to push")]
    pub token: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Target repository as owner/name")]
    pub repository: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the branch and publish it (the default)
    Paint,
    /// Show the grid that would be painted without touching the repository
    Preview {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Paint) {
            Commands::Paint => crate::paint::exec(self.common, self.paint),
            Commands::Preview { json, ndjson } => crate::preview::exec(self.common, json, ndjson),
        }
    }
}
