//! # fnpack Spec Init Handler
//!
//! File: cli/src/commands/spec/init.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! Creates the spec directory (and any missing parents). Running it on an
//! existing directory is a no-op.
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Create the spec directory")]
pub struct InitArgs {
    /// Spec directory. Overrides `specs.directory` from configuration.
    #[arg(long)]
    spec_dir: Option<PathBuf>,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    let spec_dir = super::resolve_spec_dir(args.spec_dir)?;
    ensure_dir_exists(&spec_dir)?;
    println!("Spec directory ready: {}", spec_dir.display());
    Ok(())
}
