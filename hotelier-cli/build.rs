//! Build script for hotelier-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("hotelier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage hotels, rooms and monthly reservations")
        .long_about(
            "Console manager for hotels, their rooms and room reservations over a \
             one-month booking calendar. Commands are entered in an interactive \
             session or read from a script file.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file, read after ~/.hotelier/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("HOTELIER_CONFIG"),
        )
        .subcommands(vec![
            Command::new("shell")
                .about("Start an interactive session")
                .long_about(
                    "Read session commands from standard input until exit, quit or end of input",
                ),
            Command::new("run")
                .about("Run a script of session commands")
                .long_about(
                    "Execute one session command per line; stops at the first failure \
                     unless --keep-going is given",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main hotelier.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("hotelier.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
