use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqmerge",
    about = "Apply two sets of changes to a shared original",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file describing how conflicts are resolved
    #[arg(long, global = true)]
    pub policy: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two edited strings, character by character
    String(MergeArgs),
    /// Merge two edited text files, line by line
    File(MergeArgs),
    /// Print the effective conflict policy as TOML
    Policy,
}

#[derive(Args)]
pub struct MergeArgs {
    /// The original (string or path)
    pub source: String,
    /// First edited version
    pub first: String,
    /// Second edited version
    pub second: String,
    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
