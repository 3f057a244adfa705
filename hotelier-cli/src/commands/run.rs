//! Script execution command.

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{default_format, load_configuration, open_registry, GlobalOptions};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Run a script of session commands
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Script file, one session command per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Continue after a failing command and report failures at the end
    #[arg(long)]
    pub keep_going: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut session = Session::new(open_registry(&config)?, default_format(&config));

        let script = BufReader::new(File::open(&self.file)?);
        log::debug!("running script {}", self.file.display());

        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        session.run_script(script, &mut stdout, &mut stderr, self.keep_going)
    }
}
