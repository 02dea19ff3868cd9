//! # Single-Input Fast Path (`commands::archive::fast_path`)
//!
//! File: cli/src/commands/archive/fast_path.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Decides whether a single input can be used as the archive without being
//! packaged again. Only a set of exactly one entry qualifies:
//!
//! - a URL is used as-is;
//! - a local file that already is a ZIP archive (by signature) is used as-is;
//! - any other local file is used as-is when `--no-zip` was given.
//!
//! Directories and multi-entry sets are always packaged, whatever `--no-zip`
//! says.
//!
use crate::commands::archive::inputs::ResolvedInput;
use crate::common::archive::zip;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use tracing::debug;

/// Returns the path or URL to use unchanged, or `None` if packaging is needed.
///
/// # Errors
///
/// Returns an `Err` when the single local file has disappeared since
/// resolution or cannot be read.
pub fn fast_path(resolved: &[ResolvedInput], no_zip: bool) -> Result<Option<String>> {
    let [single] = resolved else {
        debug!("{} resolved inputs, packaging required", resolved.len());
        return Ok(None);
    };

    let path = match single {
        ResolvedInput::Remote(url) => {
            debug!("Single remote input {}, using the URL directly", url);
            return Ok(Some(url.clone()));
        }
        ResolvedInput::Local(path) => path,
    };

    let metadata =
        fs::metadata(path).with_context(|| format!("open input file {}", path.display()))?;
    if metadata.is_dir() {
        return Ok(None);
    }

    let literal = path.to_string_lossy().into_owned();
    if zip::is_zip(path)? {
        debug!("{} is already a zip archive", literal);
        return Ok(Some(literal));
    }
    if no_zip {
        debug!("Using {} unpackaged (--no-zip)", literal);
        return Ok(Some(literal));
    }
    Ok(None)
}
