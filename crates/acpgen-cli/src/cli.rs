//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::GenerateCommand;
use crate::error::CliError;

/// acpgen - AI Control Plane Project Generator
///
/// Creates the project files and directory structure.
#[derive(Debug, Parser)]
#[command(
    name = "acpgen",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the project structure
    Generate(GenerateCommand),
}

impl Cli {
    /// Execute the selected command. Bare invocation runs `generate`.
    pub fn execute(self) -> Result<(), CliError> {
        match self.command {
            Some(Command::Generate(cmd)) => cmd.execute(),
            None => GenerateCommand::default().execute(),
        }
    }
}
