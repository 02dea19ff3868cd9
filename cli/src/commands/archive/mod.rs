//! # fnpack Archive Command Group
//!
//! File: cli/src/commands/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Entry point and router for the `fnpack archive` command group, plus the
//! building blocks that turn a list of user inputs into an archive a package
//! can reference.
//!
//! ## Architecture
//!
//! - `ArchiveArgs` / `ArchiveCommand` / `handle_archive`: Clap wiring and dispatch.
//! - `create`: the `fnpack archive create` handler.
//! - `inputs`: validation and glob resolution of the raw inputs.
//! - `naming`: archive names with injectable randomness.
//! - `fast_path`: decides when a single input can be used unpackaged.
//! - `materialize`: builds a fresh ZIP from the inputs.
//! - `dedup`: declarative mode, reusing equivalent upload specs.
//! - `stager`: the orchestrator tying all of the above together.
//!
//! ## Examples
//!
//! ```bash
//! # Package two files and upload the result
//! fnpack archive create src/main.py requirements.txt
//!
//! # Use an existing zip as-is
//! fnpack archive create ./fn.zip
//!
//! # Record an upload spec instead of uploading
//! fnpack archive create 'src/**/*.js' --spec-file package-myfn.yaml --name myfn
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements the `fnpack archive create` command.
mod create;

pub mod dedup;
pub mod fast_path;
pub mod inputs;
pub mod materialize;
pub mod naming;
pub mod stager;

/// # Archive Command Group Arguments (`ArchiveArgs`)
///
/// Captures which `fnpack archive` subcommand the user asked for.
#[derive(Parser, Debug)]
pub struct ArchiveArgs {
    #[command(subcommand)]
    command: ArchiveCommand,
}

/// # Archive Subcommands (`ArchiveCommand`)
#[derive(Subcommand, Debug)]
enum ArchiveCommand {
    /// Corresponds to `fnpack archive create`.
    /// Validates the inputs, then either uploads an archive built from them or
    /// records an upload spec for them (`--spec-file`).
    Create(create::CreateArgs),
}

/// # Handle Archive Command (`handle_archive`)
///
/// Dispatches to the handler of the chosen subcommand and propagates its result.
pub fn handle_archive(args: ArchiveArgs) -> Result<()> {
    match args.command {
        ArchiveCommand::Create(args) => create::handle_create(args)?,
    }
    Ok(())
}
