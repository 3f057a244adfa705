//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, RunCommand, ShellCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing hotels, rooms and monthly reservations.
#[derive(Parser)]
#[command(name = "hotelier")]
#[command(version, about = "Manage hotels, rooms and monthly reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file, read after ~/.hotelier/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "HOTELIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `shell`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session
    Shell(ShellCommand),

    /// Run a script of session commands
    Run(RunCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["hotelier", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_arguments() {
        let cli =
            Cli::try_parse_from(["hotelier", "run", "setup.txt", "--keep-going", "--verbose"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Run(cmd)) => {
                assert_eq!(cmd.file, PathBuf::from("setup.txt"));
                assert!(cmd.keep_going);
            }
            _ => panic!("expected run command"),
        }
    }
}
