//! # fnpack Package Command Group
//!
//! File: cli/src/commands/package/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Router for `fnpack package`. Packages themselves are created elsewhere;
//! this group only answers questions about packages that already exist.
//!
//! ## Examples
//!
//! ```bash
//! fnpack package consumers hello-pkg --namespace staging
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements the `fnpack package consumers` command.
pub mod consumers;

/// # Package Command Group Arguments (`PackageArgs`)
#[derive(Parser, Debug)]
pub struct PackageArgs {
    #[command(subcommand)]
    command: PackageCommand,
}

#[derive(Subcommand, Debug)]
enum PackageCommand {
    /// Corresponds to `fnpack package consumers`.
    /// Lists the functions referencing a package.
    Consumers(consumers::ConsumersArgs),
}

/// Dispatches `fnpack package <subcommand>`.
pub fn handle_package(args: PackageArgs) -> Result<()> {
    match args.command {
        PackageCommand::Consumers(args) => consumers::handle_consumers(args)?,
    }
    Ok(())
}
