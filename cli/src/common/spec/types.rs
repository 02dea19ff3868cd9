//! # fnpack Spec Record Types (`common::spec::types`)
//!
//! File: cli/src/common/spec/types.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Record shapes held in the spec directory, plus the equivalence predicate
//! used to decide whether an upload spec has already been declared.
//!
//! An `ArchiveUploadSpec` document looks like this on disk:
//!
//! ```yaml
//! ---
//! kind: ArchiveUploadSpec
//! name: hello-js-k3x9
//! include:
//! - hello.js
//! - lib/*.js
//! ```
//!
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Prefix of archive references that point into the spec store.
pub const ARCHIVE_URL_PREFIX: &str = "archive://";

/// `kind` value of upload spec documents.
pub const ARCHIVE_UPLOAD_SPEC_KIND: &str = "ArchiveUploadSpec";

/// "Package these globs into an archive with this name."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveUploadSpec {
    pub name: String,
    #[serde(rename = "include", default)]
    pub include_globs: Vec<String>,
    #[serde(rename = "exclude", default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_globs: Vec<String>,
}

/// How two upload specs are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchMode {
    /// Names must be equal too.
    pub exact_name: bool,
    /// Compare globs as sets (order and repeats ignored) instead of sequences.
    pub fuzzy_globs: bool,
}

impl MatchMode {
    /// Mode used when looking for an upload spec to reuse: any name, same glob set.
    pub const REUSE: MatchMode = MatchMode {
        exact_name: false,
        fuzzy_globs: true,
    };
}

impl ArchiveUploadSpec {
    pub fn new(name: impl Into<String>, include_globs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            include_globs,
            exclude_globs: Vec::new(),
        }
    }

    /// Equivalence under `mode`. Reflexive, symmetric and transitive for any
    /// fixed mode; a subset or superset of globs is never equivalent.
    pub fn is_equivalent(&self, other: &ArchiveUploadSpec, mode: MatchMode) -> bool {
        if mode.exact_name && self.name != other.name {
            return false;
        }
        if mode.fuzzy_globs {
            same_set(&self.include_globs, &other.include_globs)
                && same_set(&self.exclude_globs, &other.exclude_globs)
        } else {
            self.include_globs == other.include_globs && self.exclude_globs == other.exclude_globs
        }
    }
}

fn same_set(a: &[String], b: &[String]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}

/// On-disk form of an upload spec: the record tagged with its kind.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ArchiveUploadSpecDocument {
    pub kind: String,
    #[serde(flatten)]
    pub spec: ArchiveUploadSpec,
}

/// Any document found in the spec directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredResource {
    pub kind: String,
    pub name: Option<String>,
    pub source: PathBuf,
}

/// Read-only snapshot of a spec directory.
#[derive(Debug, Default, Clone)]
pub struct FileResources {
    /// Every document, in file then document order.
    pub resources: Vec<DeclaredResource>,
    /// The subset of documents that are upload specs, parsed.
    pub archive_upload_specs: Vec<ArchiveUploadSpec>,
}

impl FileResources {
    /// First upload spec equivalent to `candidate` under `mode`.
    pub fn find_equivalent(
        &self,
        candidate: &ArchiveUploadSpec,
        mode: MatchMode,
    ) -> Option<&ArchiveUploadSpec> {
        self.archive_upload_specs
            .iter()
            .find(|existing| existing.is_equivalent(candidate, mode))
    }
}
