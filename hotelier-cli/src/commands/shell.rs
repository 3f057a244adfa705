//! Interactive session command.
//!
//! Reads session commands from standard input until `exit`, `quit` or end
//! of input. A prompt is shown only when standard input is a terminal, so
//! piping commands into `hotelier shell` produces clean output.

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{default_format, load_configuration, open_registry, GlobalOptions};
use clap::Args;
use std::io::{self, IsTerminal};

/// Start an interactive session
#[derive(Args, Debug, Default)]
pub struct ShellCommand {
    /// Never show the prompt, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut session = Session::new(open_registry(&config)?, default_format(&config));

        let stdin = io::stdin();
        let interactive = stdin.is_terminal() && !self.no_prompt;
        if interactive && !global.quiet {
            println!("Type 'help' for a list of commands, 'exit' to leave.");
        }

        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        session.run_interactive(stdin.lock(), &mut stdout, &mut stderr, interactive)
    }
}
