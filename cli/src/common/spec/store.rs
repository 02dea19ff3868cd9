//! # fnpack Spec Store (`common::spec::store`)
//!
//! File: cli/src/common/spec/store.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! The declarative spec store: a directory of YAML files, each holding one or
//! more documents separated by `---`. fnpack only understands documents of
//! kind `ArchiveUploadSpec`; everything else is loaded as an opaque
//! `DeclaredResource` so listings stay complete.
//!
//! ## Architecture
//!
//! - `SpecStore` is the seam the archive stager talks to (`read_all`, `save`).
//! - `YamlSpecStore` implements it on top of `walkdir` and `serde_yaml`.
//! - `save` appends a new document; existing documents are never rewritten.
//!
//! Reads and writes are not locked. Two runs against the same directory at
//! the same time can both miss each other's record and both append one.
//!
use crate::common::fs::io;
use crate::common::spec::types::{
    ArchiveUploadSpec, ArchiveUploadSpecDocument, DeclaredResource, FileResources,
    ARCHIVE_UPLOAD_SPEC_KIND,
};
use crate::core::error::{FnpackError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Access to the declarative spec directory.
pub trait SpecStore {
    /// Loads every document under `spec_dir`.
    fn read_all(&self, spec_dir: &Path) -> Result<FileResources>;

    /// Persists `spec` as a new document in `target`.
    fn save(&self, spec: &ArchiveUploadSpec, target: &Path) -> Result<()>;
}

/// `SpecStore` backed by YAML files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSpecStore;

impl SpecStore for YamlSpecStore {
    fn read_all(&self, spec_dir: &Path) -> Result<FileResources> {
        if !spec_dir.is_dir() {
            return Err(anyhow!(FnpackError::Spec(format!(
                "Spec directory '{}' does not exist. Run `fnpack spec init` first.",
                spec_dir.display()
            ))));
        }

        let mut resources = FileResources::default();
        for entry in WalkDir::new(spec_dir).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk spec directory {:?}", spec_dir))?;
            if entry.file_type().is_file() && is_yaml(entry.path()) {
                load_file(entry.path(), &mut resources)?;
            }
        }
        debug!(
            "Loaded {} document(s), {} archive upload spec(s) from {:?}",
            resources.resources.len(),
            resources.archive_upload_specs.len(),
            spec_dir
        );
        Ok(resources)
    }

    fn save(&self, spec: &ArchiveUploadSpec, target: &Path) -> Result<()> {
        let document = ArchiveUploadSpecDocument {
            kind: ARCHIVE_UPLOAD_SPEC_KIND.to_string(),
            spec: spec.clone(),
        };
        let yaml = serde_yaml::to_string(&document)
            .with_context(|| format!("Failed to serialize archive upload spec {}", spec.name))?;
        io::append_string_to_file(target, &format!("---\n{}", yaml))?;
        info!("Saved archive upload spec {} to {:?}", spec.name, target);
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn load_file(path: &Path, resources: &mut FileResources) -> Result<()> {
    let content = io::read_file_to_string(path)?;
    for document in serde_yaml::Deserializer::from_str(&content) {
        let value = Value::deserialize(document)
            .with_context(|| format!("Failed to parse YAML in {:?}", path))?;
        if value.is_null() {
            continue;
        }

        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                anyhow!(FnpackError::Spec(format!(
                    "Document without a kind in {:?}",
                    path
                )))
            })?
            .to_string();

        let name = if kind == ARCHIVE_UPLOAD_SPEC_KIND {
            let document: ArchiveUploadSpecDocument = serde_yaml::from_value(value)
                .with_context(|| format!("Invalid {} in {:?}", ARCHIVE_UPLOAD_SPEC_KIND, path))?;
            let name = document.spec.name.clone();
            resources.archive_upload_specs.push(document.spec);
            Some(name)
        } else {
            value
                .get("metadata")
                .and_then(|m| m.get("name"))
                .or_else(|| value.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        resources.resources.push(DeclaredResource {
            kind,
            name,
            source: path.to_path_buf(),
        });
    }
    Ok(())
}
