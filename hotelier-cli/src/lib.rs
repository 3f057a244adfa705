//! Library exports for hotelier-cli.
//!
//! This module exports the CLI structure for use by the build script
//! to generate man pages, and the session for benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod session;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
pub use session::Session;
