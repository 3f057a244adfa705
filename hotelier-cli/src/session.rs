//! Line-oriented command session.
//!
//! A session owns the hotel registry for the lifetime of the process. Each
//! input line is split into words (quotes group words) and parsed with clap
//! into a [`SessionCommand`]. The same session backs both the interactive
//! `shell` and scripted `run` modes; they differ only in how failures are
//! handled.

use crate::commands::{
    AddRoomArgs, AvailabilityArgs, CancelArgs, CreateHotelArgs, ListHotelsArgs, RemoveRoomArgs,
    RenameHotelArgs, ReservationArgs, ReserveArgs, RoomArgs, RoomsArgs, SetBasePriceArgs,
    SetRoomPriceArgs, SummaryArgs,
};
use crate::error::CliError;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use hotelier::{HotelRegistry, OutputFormat};
use std::io::{BufRead, Write};

/// Prompt shown before each line when reading from a terminal.
pub const PROMPT: &str = "hotelier> ";

/// One parsed session line.
#[derive(Parser, Debug)]
#[command(name = "hotelier", no_binary_name = true, disable_version_flag = true)]
#[command(about = "Hotel session commands")]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Create a hotel with numbered standard rooms
    CreateHotel(CreateHotelArgs),

    /// List all hotels
    ListHotels(ListHotelsArgs),

    /// Rename a hotel
    RenameHotel(RenameHotelArgs),

    /// Change a hotel's base price
    SetBasePrice(SetBasePriceArgs),

    /// Add a room to a hotel
    AddRoom(AddRoomArgs),

    /// Remove a room that has no reservations
    RemoveRoom(RemoveRoomArgs),

    /// Change the nightly price of a room
    SetRoomPrice(SetRoomPriceArgs),

    /// Reserve a room for a guest
    Reserve(ReserveArgs),

    /// Cancel a guest's first reservation
    Cancel(CancelArgs),

    /// Count available and booked rooms on a date
    Availability(AvailabilityArgs),

    /// List the rooms of a hotel
    Rooms(RoomsArgs),

    /// Show one room and its reservations
    Room(RoomArgs),

    /// Show a guest's reservation
    Reservation(ReservationArgs),

    /// Show a hotel's high-level figures
    Summary(SummaryArgs),

    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// Whether the session continues after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading input.
    Exit,
}

/// An in-memory session over a hotel registry.
pub struct Session {
    registry: HotelRegistry,
    format: OutputFormat,
}

impl Session {
    /// Create a session over `registry`.
    ///
    /// `format` is used by listing commands that are not given `--format`.
    pub fn new(registry: HotelRegistry, format: OutputFormat) -> Self {
        Self { registry, format }
    }

    /// The registry managed by this session.
    pub fn registry(&self) -> &HotelRegistry {
        &self.registry
    }

    /// Mutable access to the registry.
    pub fn registry_mut(&mut self) -> &mut HotelRegistry {
        &mut self.registry
    }

    /// Resolve a listing format, falling back to the session default.
    pub fn format_or_default(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.unwrap_or(self.format)
    }

    /// Execute a single line.
    ///
    /// Blank lines and `#` comments are ignored.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, CliError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_line(trimmed)?;
        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        write!(out, "{e}")?;
                        Ok(Flow::Continue)
                    }
                    _ => Err(CliError::InvalidArguments(clap_message(&e))),
                };
            }
        };

        log::debug!("session command: {:?}", parsed.command);
        match parsed.command {
            SessionCommand::CreateHotel(cmd) => cmd.execute(self, out)?,
            SessionCommand::ListHotels(cmd) => cmd.execute(self, out)?,
            SessionCommand::RenameHotel(cmd) => cmd.execute(self, out)?,
            SessionCommand::SetBasePrice(cmd) => cmd.execute(self, out)?,
            SessionCommand::AddRoom(cmd) => cmd.execute(self, out)?,
            SessionCommand::RemoveRoom(cmd) => cmd.execute(self, out)?,
            SessionCommand::SetRoomPrice(cmd) => cmd.execute(self, out)?,
            SessionCommand::Reserve(cmd) => cmd.execute(self, out)?,
            SessionCommand::Cancel(cmd) => cmd.execute(self, out)?,
            SessionCommand::Availability(cmd) => cmd.execute(self, out)?,
            SessionCommand::Rooms(cmd) => cmd.execute(self, out)?,
            SessionCommand::Room(cmd) => cmd.execute(self, out)?,
            SessionCommand::Reservation(cmd) => cmd.execute(self, out)?,
            SessionCommand::Summary(cmd) => cmd.execute(self, out)?,
            SessionCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Run an interactive session until `exit` or end of input.
    ///
    /// Failed commands are reported on `err` and the session continues.
    pub fn run_interactive(
        &mut self,
        input: impl BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
        prompt: bool,
    ) -> Result<(), CliError> {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line, out) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(err, "Error: {e}")?,
            }

            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
        }

        if prompt {
            writeln!(out)?;
        }
        Ok(())
    }

    /// Run a script of session commands.
    ///
    /// Stops at the first failure unless `keep_going` is set. With
    /// `keep_going`, failures are reported on `err` and the script finishes
    /// with [`CliError::ScriptFailures`] carrying the first failure's exit
    /// code.
    pub fn run_script(
        &mut self,
        input: impl BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
        keep_going: bool,
    ) -> Result<(), CliError> {
        let mut failed = 0;
        let mut first_code = None;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let result = self.execute_line(&line, out).map_err(|e| CliError::Script {
                line: index + 1,
                source: Box::new(e),
            });

            match result {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if keep_going => {
                    writeln!(err, "Error: {e}")?;
                    failed += 1;
                    first_code.get_or_insert(e.exit_code());
                }
                Err(e) => return Err(e),
            }
        }

        match first_code {
            Some(exit_code) => Err(CliError::ScriptFailures { failed, exit_code }),
            None => Ok(()),
        }
    }
}

/// Split a line into words.
///
/// Whitespace separates words; single or double quotes group words and a
/// backslash escapes the next character outside quotes. `""` yields an
/// empty word.
pub fn split_line(line: &str) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                        in_word = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if let Some(open) = quote {
        return Err(CliError::InvalidArguments(format!(
            "unterminated {open} quote"
        )));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}
