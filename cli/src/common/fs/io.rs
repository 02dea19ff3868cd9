//! # fnpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!

//! ## Overview
//!
//! This module centralizes the filesystem input/output operations needed by
//! fnpack. It provides wrappers around `std::fs` functions that attach context
//! to every error.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if it is missing, and fails if the path exists but is not a directory. Used for the archive temp directory and `spec init`.
//! - **`read_file_to_string`**: Wrapper around `fs::read_to_string` with context. Used when loading spec documents.
//! - **`append_string_to_file`**: Appends to a file, creating it and its parent directory if needed. Used when saving upload specs.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! io::ensure_dir_exists(Path::new("./specs"))?;
//! io::append_string_to_file(Path::new("./specs/package.yaml"), "---\nkind: ArchiveUploadSpec\n")?;
//! let content = io::read_file_to_string(Path::new("./specs/package.yaml"))?;
//! ```
//!
use crate::core::error::{FnpackError, Result};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory (e.g., it's a file),
/// an error (`FnpackError::FileSystem`) is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(FnpackError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read,
/// with context indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends string content to a file, creating the file (and its parent
/// directory) when it does not exist yet.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the
/// file cannot be opened or written.
pub fn append_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file {:?} for appending", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    info!("Appended content to file: {:?}", path);
    Ok(())
}
