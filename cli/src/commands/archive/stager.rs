//! # Archive Stager (`commands::archive::stager`)
//!
//! File: cli/src/commands/archive/stager.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! `ArchiveStager` ties the archive pieces together and produces one
//! `ArchiveDescriptor` per request. It runs in one of two modes, chosen only
//! by whether a spec file was requested:
//!
//! - **Declarative** (`spec_file` set): record an upload spec, or reuse an
//!   equivalent one, and return an `archive://` reference. Nothing is
//!   packaged or uploaded.
//! - **Immediate**: use the single input as-is when the fast path allows it,
//!   otherwise package the inputs into a fresh ZIP, then hand the result to
//!   the uploader.
//!
//! Inputs are always validated first, in both modes.
//!
//! ## Architecture
//!
//! The stager owns its three collaborators through traits so tests can
//! substitute them:
//! - `RandomSource` for name suffixes,
//! - `SpecStore` for the spec directory,
//! - `ArchiveUploader` for publishing.
//!
//! ## Examples
//!
//! ```rust
//! let mut stager = ArchiveStager::new(ThreadRandom, YamlSpecStore, HttpUploader::new(None)?);
//! let descriptor = stager.create_archive(&ArchiveRequest {
//!     inputs: vec!["hello.js".into()],
//!     no_zip: false,
//!     spec_dir: "specs".into(),
//!     spec_file: None,
//!     name_hint: None,
//! })?;
//! println!("{}", descriptor);
//! ```
//!
use crate::commands::archive::naming::{self, RandomSource};
use crate::commands::archive::{dedup, fast_path, inputs, materialize};
use crate::common::network::upload::{ArchiveUploader, UploadedArchive};
use crate::common::spec::store::SpecStore;
use crate::core::error::Result;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// The outcome of staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveDescriptor {
    /// Symbolic `archive://<name>` reference into the spec store.
    UrlReference { archive_store_key: String },
    /// Archive published by the uploader.
    Uploaded(UploadedArchive),
}

impl fmt::Display for ArchiveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveDescriptor::UrlReference { archive_store_key } => {
                write!(f, "{}", archive_store_key)
            }
            ArchiveDescriptor::Uploaded(uploaded) => write!(f, "{}", uploaded),
        }
    }
}

/// What to stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub inputs: Vec<String>,
    /// Skip packaging a single non-zip file. Ignored for multiple inputs.
    pub no_zip: bool,
    pub spec_dir: PathBuf,
    /// Declarative mode when set.
    pub spec_file: Option<PathBuf>,
    pub name_hint: Option<String>,
}

pub struct ArchiveStager<R, S, U> {
    random: R,
    store: S,
    uploader: U,
    temp_base: Option<PathBuf>,
}

impl<R, S, U> ArchiveStager<R, S, U>
where
    R: RandomSource,
    S: SpecStore,
    U: ArchiveUploader,
{
    pub fn new(random: R, store: S, uploader: U) -> Self {
        Self {
            random,
            store,
            uploader,
            temp_base: None,
        }
    }

    /// Parent directory for freshly built archives instead of the system temp dir.
    pub fn with_temp_base(mut self, temp_base: Option<PathBuf>) -> Self {
        self.temp_base = temp_base;
        self
    }

    #[cfg(test)]
    pub fn uploader(&self) -> &U {
        &self.uploader
    }

    /// Stages `request` and returns the resulting descriptor.
    ///
    /// # Errors
    ///
    /// Any validation, filesystem, spec store or upload failure. Every error
    /// is terminal; nothing is retried.
    pub fn create_archive(&mut self, request: &ArchiveRequest) -> Result<ArchiveDescriptor> {
        inputs::validate(&request.inputs)?;

        if let Some(spec_file) = &request.spec_file {
            return dedup::resolve_spec_reference(
                &self.store,
                &mut self.random,
                &request.spec_dir,
                &request.inputs,
                request.name_hint.as_deref(),
                spec_file,
            );
        }

        let archive = self.archive_file_if_needed(
            &request.inputs,
            request.name_hint.as_deref(),
            request.no_zip,
        )?;
        info!("Uploading staged archive {}", archive);
        let uploaded = self.uploader.upload(&archive)?;
        Ok(ArchiveDescriptor::Uploaded(uploaded))
    }

    /// Returns the input itself when the fast path applies, otherwise the
    /// path of a newly built archive.
    pub fn archive_file_if_needed(
        &mut self,
        inputs: &[String],
        name_hint: Option<&str>,
        no_zip: bool,
    ) -> Result<String> {
        let name = naming::archive_name(&mut self.random, name_hint, inputs);
        let resolved = inputs::resolve(inputs)?;

        if let Some(source) = fast_path::fast_path(&resolved, no_zip)? {
            info!("Using {} as the archive without packaging", source);
            return Ok(source);
        }

        let archive = materialize::materialize(inputs, &name, self.temp_base.as_deref())?;
        Ok(archive.to_string_lossy().into_owned())
    }
}
