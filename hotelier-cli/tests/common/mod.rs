//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for piping session scripts
//! - Script and configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into tests.
const HOTELIER_VARS: [&str; 6] = [
    "HOTELIER_CONFIG",
    "HOTELIER_LOG_MODE",
    "HOTELIER_DEFAULT_BASE_PRICE",
    "HOTELIER_MAX_ROOMS",
    "HOTELIER_MINIMUM_ROOM_PRICE",
    "HOTELIER_OUTPUT_FORMAT",
];

/// Test environment with an isolated home directory.
///
/// The temporary directory doubles as `$HOME`, so the user configuration
/// file `~/.hotelier/config.yaml` is under the test's control.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the hotelier binary.
    ///
    /// `HOME` points at the temporary directory and every `HOTELIER_*`
    /// variable is cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotelier").expect("Failed to find hotelier binary");
        cmd.env("HOME", &self.temp_path);
        for var in HOTELIER_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a `shell` command with `script` piped to standard input.
    pub fn session(&self, script: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("shell").write_stdin(script.to_string());
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file `~/.hotelier/config.yaml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.temp_path.join(".hotelier");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Run a session script and return its standard output.
    ///
    /// # Panics
    /// Panics if the session exits with a non-zero code.
    pub fn session_output(&self, script: &str) -> String {
        let output = self
            .session(script)
            .output()
            .expect("Failed to run hotelier shell");

        assert!(
            output.status.success(),
            "Session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

/// The Aurora fixture: a five-room hotel at the default base price.
#[allow(dead_code)]
pub const AURORA: &str = "create-hotel Aurora --rooms 5\n";
