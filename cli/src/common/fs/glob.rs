//! # fnpack Glob Expansion (`common::fs::glob`)
//!
//! File: cli/src/common/fs/glob.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Expands archive input patterns into the files they name. Patterns without
//! glob metacharacters are treated as literal paths and returned verbatim when
//! they exist, so `./fn.zip` comes back as `./fn.zip` rather than a rewritten
//! form. A pattern that matches nothing contributes nothing; deciding whether
//! that is an error is up to the caller.
//!
use crate::core::error::{FnpackError, Result};
use anyhow::anyhow;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Returns true if `pattern` contains any glob metacharacter.
pub fn has_glob_magic(pattern: &str) -> bool {
    pattern.contains(|c: char| matches!(c, '*' | '?' | '['))
}

/// Expands every pattern and concatenates the matches in pattern order.
///
/// # Errors
///
/// Returns an `Err` only for syntactically invalid patterns. Matches that
/// cannot be read are logged and skipped.
pub fn find_all_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !has_glob_magic(pattern) {
            let path = PathBuf::from(pattern);
            if path.exists() {
                files.push(path);
            }
            continue;
        }

        let matches = glob::glob(pattern).map_err(|e| {
            anyhow!(FnpackError::FileSystem(format!(
                "Invalid glob pattern '{}': {}",
                pattern, e
            )))
        })?;
        for entry in matches {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => warn!("Skipping unreadable glob match for '{}': {}", pattern, e),
            }
        }
    }
    debug!("Expanded {} pattern(s) into {} file(s)", patterns.len(), files.len());
    Ok(files)
}
