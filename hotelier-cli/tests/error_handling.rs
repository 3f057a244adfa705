//! Integration tests for error handling and exit codes.
//!
//! These tests verify that hotelier returns appropriate exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Business-rule failure (duplicate, not found, unavailable)
//! - Exit code 4: Invalid arguments
//! - Exit code 5: I/O error
//! - Exit code 7: Configuration error
//!
//! Scripts run with `hotelier run` stop at the first failing line and exit
//! with that line's code, so each scenario is a short script.

mod common;

use common::{TestEnv, AURORA};
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_successful_script_exits_zero() {
    let env = TestEnv::new();
    let script = env.write_file(
        "setup.txt",
        &format!(
            "# Aurora\n{AURORA}\nreserve Aurora Alice \"Room 1\" 2024-06-01 2024-06-03\nsummary Aurora\n"
        ),
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Reserved Room 1 for Alice"));
}

#[test]
fn test_shell_exits_zero_despite_failures() {
    let env = TestEnv::new();
    env.session("cancel Nowhere Alice\nexit\n").assert().code(0);
}

// ============================================================================
// Business-Rule Failures (Exit Code 1)
// ============================================================================

#[test]
fn test_duplicate_hotel_exits_one() {
    let env = TestEnv::new();
    let script = env.write_file("dup.txt", &format!("{AURORA}create-hotel aurora\n"));

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_overlapping_reservation_exits_one() {
    let env = TestEnv::new();
    let script = env.write_file(
        "overlap.txt",
        &format!(
            "{AURORA}reserve Aurora Alice \"Room 1\" 2024-06-01 2024-06-03\n\
             reserve Aurora Bob \"Room 1\" 2024-06-02 2024-06-04\n"
        ),
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn test_unknown_hotel_exits_one() {
    let env = TestEnv::new();
    let script = env.write_file("missing.txt", "summary Nowhere\n");

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hotel not found: Nowhere"));
}

#[test]
fn test_room_count_out_of_range_exits_one() {
    let env = TestEnv::new();
    let script = env.write_file("big.txt", "create-hotel Aurora --rooms 51\n");

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid room count"));
}

#[test]
fn test_script_stops_at_first_failure() {
    let env = TestEnv::new();
    let script = env.write_file(
        "stop.txt",
        "create-hotel Aurora\ncancel Aurora Nobody\ncreate-hotel Borealis\n",
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Borealis").not());
}

#[test]
fn test_keep_going_runs_every_line() {
    let env = TestEnv::new();
    let script = env.write_file(
        "keep.txt",
        "create-hotel Aurora\ncancel Aurora Nobody\nreserve Aurora Bob \"Room 1\" someday 2024-06-02\ncreate-hotel Borealis\n",
    );

    env.command()
        .arg("run")
        .arg(&script)
        .arg("--keep-going")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Created hotel 'Borealis'"))
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("2 script commands failed"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_unknown_session_command_exits_four() {
    let env = TestEnv::new();
    let script = env.write_file("unknown.txt", "teleport Aurora\n");

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_bad_date_exits_four() {
    let env = TestEnv::new();
    let script = env.write_file(
        "date.txt",
        &format!("{AURORA}reserve Aurora Alice \"Room 1\" 2024-13-01 2024-06-03\n"),
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_unterminated_quote_exits_four() {
    let env = TestEnv::new();
    let script = env.write_file("quote.txt", "create-hotel \"Aurora\n");

    env.command().arg("run").arg(&script).assert().code(4);
}

// ============================================================================
// I/O Errors (Exit Code 5)
// ============================================================================

#[test]
fn test_missing_script_exits_five() {
    let env = TestEnv::new();
    env.command()
        .arg("run")
        .arg(env.path().join("no-such-script.txt"))
        .assert()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_missing_config_file_exits_seven() {
    let env = TestEnv::new();
    env.command()
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .arg("shell")
        .write_stdin("exit\n")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key_exits_seven() {
    let env = TestEnv::new();
    env.write_user_config("floors: 3\n");

    env.session("exit\n").assert().code(7);
}

#[test]
fn test_invalid_config_value_exits_seven() {
    let env = TestEnv::new();
    env.write_user_config("max_rooms: 0\n");

    env.session("exit\n").assert().code(7);
}

#[test]
fn test_zero_default_base_price_exits_seven() {
    let env = TestEnv::new();
    env.write_user_config("default_base_price: 0\n");

    env.session("exit\n")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("default_base_price"));
}

#[test]
fn test_malformed_env_variable_exits_seven() {
    let env = TestEnv::new();
    env.command()
        .env("HOTELIER_MAX_ROOMS", "many")
        .arg("shell")
        .write_stdin("exit\n")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("HOTELIER_MAX_ROOMS"));
}
