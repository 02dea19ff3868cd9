//! # Spec Reference Resolution (`commands::archive::dedup`)
//!
//! File: cli/src/commands/archive/dedup.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Declarative mode of `fnpack archive create`. Instead of packaging and
//! uploading, an `ArchiveUploadSpec` recording the include globs is written to
//! the spec directory, and the archive is referenced symbolically as
//! `archive://<name>`.
//!
//! ## Architecture
//!
//! 1. Validate the globs; nothing is written when any of them is broken.
//! 2. Build a candidate spec with a fresh name.
//! 3. Snapshot the spec directory and look for an equivalent upload spec
//!    (any name, same set of globs).
//! 4. If one exists, adopt its name and write nothing. Otherwise append the
//!    candidate to the spec file.
//!
//! Running the same command twice against an unchanged spec directory
//! therefore returns the same reference and leaves a single record behind.
//!
use crate::commands::archive::inputs;
use crate::commands::archive::naming::{self, RandomSource};
use crate::commands::archive::stager::ArchiveDescriptor;
use crate::common::spec::store::SpecStore;
use crate::common::spec::types::{ArchiveUploadSpec, MatchMode, ARCHIVE_URL_PREFIX};
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Resolve Spec Reference (`resolve_spec_reference`)
///
/// Returns an `ArchiveDescriptor::UrlReference` for `include_globs`, reusing
/// an equivalent upload spec from `spec_dir` when there is one and otherwise
/// saving a new one to `spec_file`.
///
/// ## Arguments
///
/// * `store` - The spec store to read from and save to.
/// * `random` - Randomness for the candidate's name.
/// * `spec_dir` - The spec directory.
/// * `include_globs` - The archive inputs, recorded verbatim.
/// * `name_hint` - Optional prefix for the new name.
/// * `spec_file` - Where a new spec is appended. Relative paths are taken
///   relative to `spec_dir`.
///
/// ## Errors
///
/// Returns an `Err` if validation fails, the spec directory cannot be read,
/// or the new spec cannot be written.
pub fn resolve_spec_reference<S, R>(
    store: &S,
    random: &mut R,
    spec_dir: &Path,
    include_globs: &[String],
    name_hint: Option<&str>,
    spec_file: &Path,
) -> Result<ArchiveDescriptor>
where
    S: SpecStore + ?Sized,
    R: RandomSource + ?Sized,
{
    inputs::validate(include_globs)?;

    let mut candidate = ArchiveUploadSpec::new(
        naming::archive_name(random, name_hint, include_globs),
        include_globs.to_vec(),
    );

    let declared = store.read_all(spec_dir).context("read specs")?;
    if let Some(existing) = declared.find_equivalent(&candidate, MatchMode::REUSE) {
        println!("Re-using previously created archive {}", existing.name);
        info!(
            "Found equivalent archive upload spec {}, skipping save",
            existing.name
        );
        candidate.name = existing.name.clone();
    } else {
        let target = spec_file_path(spec_dir, spec_file);
        store
            .save(&candidate, &target)
            .with_context(|| format!("write spec file {}", target.display()))?;
    }

    Ok(ArchiveDescriptor::UrlReference {
        archive_store_key: format!("{}{}", ARCHIVE_URL_PREFIX, candidate.name),
    })
}

/// Relative spec files live inside the spec directory.
pub fn spec_file_path(spec_dir: &Path, spec_file: &Path) -> PathBuf {
    if spec_file.is_absolute() {
        spec_file.to_path_buf()
    } else {
        spec_dir.join(spec_file)
    }
}
