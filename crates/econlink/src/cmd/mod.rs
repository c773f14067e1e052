use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod render;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full inspect link for a descriptor.
    Link(LinkArgs),
    /// Print the checksummed hex frame for a descriptor.
    Hex(DescriptorArgs),
    /// Print the !gen console command for a descriptor.
    Gen(DescriptorArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Link(args) => render::run_link(args, format),
        Command::Hex(args) => render::run_hex(args, format),
        Command::Gen(args) => render::run_gen(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Where to read the JSON descriptor from. Stdin when neither is given.
#[derive(Args, Debug, Default)]
pub struct DescriptorArgs {
    /// Inline JSON descriptor.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON descriptor from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
    /// Treat a wear of exactly 0.001 as "no wear override".
    #[arg(long)]
    pub legacy_sentinel: bool,
}

#[derive(Args, Debug)]
pub struct LinkArgs {
    #[command(flatten)]
    pub input: DescriptorArgs,
    /// URI prefix placed in front of the hex frame.
    #[arg(long, env = "ECONLINK_LINK_PREFIX")]
    pub prefix: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
