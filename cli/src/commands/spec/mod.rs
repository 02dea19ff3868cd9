//! # fnpack Spec Command Group
//!
//! File: cli/src/commands/spec/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Router for `fnpack spec`, which manages the declarative spec directory
//! that `fnpack archive create --spec-file` writes into.
//!
//! ## Examples
//!
//! ```bash
//! fnpack spec init
//! fnpack archive create 'src/*.js' --spec-file package-hello.yaml
//! fnpack spec list
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Implements the `fnpack spec init` command.
mod init;
/// Implements the `fnpack spec list` command.
mod list;

/// # Spec Command Group Arguments (`SpecArgs`)
#[derive(Parser, Debug)]
pub struct SpecArgs {
    #[command(subcommand)]
    command: SpecCommand,
}

#[derive(Subcommand, Debug)]
enum SpecCommand {
    /// Corresponds to `fnpack spec init`.
    /// Creates the spec directory.
    Init(init::InitArgs),
    /// Corresponds to `fnpack spec list`.
    /// Shows every document in the spec directory.
    List(list::ListArgs),
}

/// Dispatches `fnpack spec <subcommand>`.
pub fn handle_spec(args: SpecArgs) -> Result<()> {
    match args.command {
        SpecCommand::Init(args) => init::handle_init(args)?,
        SpecCommand::List(args) => list::handle_list(args)?,
    }
    Ok(())
}

/// `--spec-dir` when given, otherwise `specs.directory` from configuration.
fn resolve_spec_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => Ok(PathBuf::from(config::load_config()?.specs.directory)),
    }
}
