use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the flat `resource -> type -> address -> values` model
    Flatten(FlattenArgs),
    /// Count resources per type
    Summary(PlanArgs),
    /// Show the module tree with resource addresses
    Tree(PlanArgs),
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Plan JSON produced by `terraform show -json`, or `-` for stdin
    pub path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Single-line JSON output
    #[arg(long, env = "TFPLAN_COMPACT")]
    pub compact: bool,

    /// Fail if any resource entry or module was skipped
    #[arg(long, env = "TFPLAN_STRICT")]
    pub strict: bool,
}
