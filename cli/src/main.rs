//! # fnpack Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This file serves as the main entry point for the fnpack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`archive`, `package`, `spec`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level and printed with their full context chain
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! fnpack --help
//!
//! # Stage an archive with debug logging
//! fnpack -vv archive create src/ requirements.txt
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (archive, package, spec)
mod common; // Shared utilities (archive, fs, network, spec)
mod core; // Core infrastructure (errors, config)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "fnpack",
    about = "Stage function source archives for upload or declarative specs",
    long_about = "Turns files, directories, glob patterns or a URL into an archive a function\n\
                  package can reference, either uploading it right away or recording an\n\
                  archive upload spec in the spec directory.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Archive(commands::archive::ArchiveArgs),
    #[command(alias = "pkg")]
    Package(commands::package::PackageArgs),
    Spec(commands::spec::SpecArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Archive(args) => commands::archive::handle_archive(args),
        Commands::Package(args) => commands::package::handle_package(args),
        Commands::Spec(args) => commands::spec::handle_spec(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn fnpack_cmd() -> Command {
        Command::cargo_bin("fnpack").expect("Failed to find fnpack binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        fnpack_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        fnpack_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
