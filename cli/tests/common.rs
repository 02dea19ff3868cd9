//! # fnpack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in that directory (other than this one) is compiled as its own test crate
//! and runs the compiled `fnpack` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get fnpack Command (`fnpack_cmd`)
///
/// `assert_cmd::Command` for the `fnpack` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn fnpack_cmd() -> Command {
    Command::cargo_bin("fnpack").expect("Failed to find fnpack binary for testing")
}

/// `fnpack_cmd` running inside `dir`, isolated from the invoking user's
/// configuration and environment overrides.
pub fn fnpack_in(dir: &Path) -> Command {
    let mut cmd = fnpack_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("FNPACK_STORAGE_URL")
        .env_remove("FNPACK_CONTROLLER_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a `.fnpack.toml` that keeps built archives under `dir/tmp`.
pub fn write_project_config(dir: &Path) {
    let temp_dir = dir.join("tmp");
    std::fs::write(
        dir.join(".fnpack.toml"),
        format!("[archive]\ntemp_dir = {:?}\n", temp_dir.to_string_lossy()),
    )
    .expect("Failed to write .fnpack.toml");
}
