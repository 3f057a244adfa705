//! Main entry point for the hotelier CLI.
//!
//! This is the command-line interface for the hotelier reservation manager.
//! It provides commands for driving a hotel session:
//! - `shell`: Interactive session (the default)
//! - `run`: Execute a script of session commands
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod output;
mod session;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = hotelier::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        Some(cli::Command::Shell(cmd)) => cmd.execute(&global),
        Some(cli::Command::Run(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
        None => commands::ShellCommand::default().execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
