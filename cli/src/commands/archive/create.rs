//! # fnpack Archive Create Handler
//!
//! File: cli/src/commands/archive/create.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Implements `fnpack archive create`. Loads configuration, lays the command
//! line flags over it, and hands an `ArchiveRequest` to an `ArchiveStager`
//! wired with the real collaborators (thread RNG, YAML spec store, HTTP
//! uploader). The resulting descriptor is printed on stdout.
//!
//! ## Usage
//!
//! ```bash
//! fnpack archive create hello.js
//! fnpack archive create main.py lib/ --name hello
//! fnpack archive create --no-zip hello.py
//! fnpack archive create 'src/*.go' --spec-file package-hello.yaml
//! fnpack archive create https://example.com/fn.zip
//! ```
//!
use crate::commands::archive::naming::ThreadRandom;
use crate::commands::archive::stager::{ArchiveRequest, ArchiveStager};
use crate::common::network::upload::HttpUploader;
use crate::common::spec::store::YamlSpecStore;
use crate::core::config::{self, is_http_url};
use crate::core::error::{FnpackError, Result};
use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Archive Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
#[command(about = "Create an archive from files, globs, directories or a URL")]
pub struct CreateArgs {
    /// Files, directories, glob patterns, or a single http(s) URL.
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<String>,

    /// Upload a single non-zip file as-is instead of packaging it.
    #[arg(long)]
    no_zip: bool,

    /// Record an archive upload spec in this file instead of uploading.
    /// Relative paths are taken relative to the spec directory.
    #[arg(long)]
    spec_file: Option<PathBuf>,

    /// Spec directory. Overrides `specs.directory` from configuration.
    #[arg(long)]
    spec_dir: Option<PathBuf>,

    /// Prefix for the generated archive name.
    #[arg(long = "name")]
    name_hint: Option<String>,

    /// Storage service URL, needed for archives too large to embed.
    #[arg(long, env = "FNPACK_STORAGE_URL")]
    storage_url: Option<String>,
}

/// # Handle Archive Create (`handle_create`)
///
/// ## Errors
///
/// Returns an `Err` on an invalid name hint or storage URL, a configuration
/// problem, or any failure reported by the stager.
pub fn handle_create(args: CreateArgs) -> Result<()> {
    info!(
        "Handling archive create for {} input(s) (spec file: {:?})",
        args.inputs.len(),
        args.spec_file
    );

    if let Some(hint) = &args.name_hint {
        if hint.contains('/') || hint.contains('\\') {
            return Err(anyhow!(FnpackError::ArgumentParsing(format!(
                "Archive name '{}' must not contain path separators.",
                hint
            ))));
        }
    }
    if let Some(url) = &args.storage_url {
        if !is_http_url(url) {
            return Err(anyhow!(FnpackError::ArgumentParsing(format!(
                "Invalid storage url '{}'. Expected an http:// or https:// URL.",
                url
            ))));
        }
    }

    let config = config::load_config()?;
    let storage_url = args.storage_url.or(config.storage.url);
    let request = ArchiveRequest {
        inputs: args.inputs,
        no_zip: args.no_zip,
        spec_dir: args
            .spec_dir
            .unwrap_or_else(|| PathBuf::from(&config.specs.directory)),
        spec_file: args.spec_file,
        name_hint: args.name_hint,
    };
    debug!("Archive request: {:?}", request);

    let uploader = HttpUploader::new(storage_url)?;
    let mut stager = ArchiveStager::new(ThreadRandom, YamlSpecStore, uploader)
        .with_temp_base(config.archive.temp_dir.map(PathBuf::from));
    let descriptor = stager.create_archive(&request)?;

    println!("Archive: {}", descriptor);
    Ok(())
}
