//! # fnpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Root of the shared utility modules used by the fnpack commands. These are
//! the collaborators the archive stager drives: filesystem probing, archive
//! building, the declarative spec store and the HTTP clients.
//!
//! ## Architecture
//!
//! - **`archive`**: ZIP signature detection and archive creation.
//! - **`fs`**: Glob expansion, file I/O and the temporary archive directory.
//! - **`network`**: Storage uploads and the function API client.
//! - **`spec`**: The spec directory store and its record types.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, fs, spec};
//! use crate::common::spec::store::SpecStore;
//!
//! let files = fs::glob::find_all_globs(&["hello.js"])?;
//! let is_packaged = archive::zip::is_zip(&files[0])?;
//! let declared = spec::store::YamlSpecStore.read_all(std::path::Path::new("specs"))?;
//! ```
//!

/// ZIP archive detection and creation.
pub mod archive;
/// Filesystem operations (globbing, I/O, temp directory).
pub mod fs;
/// HTTP clients for the storage service and the function API.
pub mod network;
/// Declarative spec directory store.
pub mod spec;
