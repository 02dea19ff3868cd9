//! # Archive Input Resolution (`commands::archive::inputs`)
//!
//! File: cli/src/commands/archive/inputs.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Checks and expands the inputs of `fnpack archive create`. Each input is a
//! local path or glob, or an `http(s)://` URL.
//!
//! - `validate` globs every local input and reports **all** inputs that
//!   matched nothing in one error, so a user fixes every broken path in one
//!   pass. URLs are accepted without being fetched.
//! - `resolve` returns the concrete entries (local matches and URLs) in input
//!   order. It does not re-validate.
//!
use crate::common::fs::glob;
use crate::core::config::is_http_url;
use crate::core::error::{ErrorList, FnpackError, Result};
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

/// One concrete archive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInput {
    /// A file or directory that existed when the inputs were expanded.
    Local(PathBuf),
    /// A URL, taken as-is.
    Remote(String),
}

/// Expanded inputs, in input order.
pub type ResolvedFileSet = Vec<ResolvedInput>;

/// Validates that every non-URL input matches at least one file.
///
/// # Errors
///
/// - `FnpackError::Validation` listing every input that matched nothing.
/// - A `finding all globs` error when a pattern is malformed.
pub fn validate(inputs: &[String]) -> Result<()> {
    let mut errors = ErrorList::new();
    for input in inputs {
        if is_http_url(input) {
            debug!("Accepting remote input {} without checking it", input);
            continue;
        }

        let files = glob::find_all_globs(std::slice::from_ref(input)).context("finding all globs")?;
        if files.is_empty() {
            errors.push(format!("Error finding any files with path \"{}\"", input));
        }
    }
    errors.into_result().map_err(FnpackError::from)?;
    Ok(())
}

/// Expands `inputs` into concrete entries.
pub fn resolve(inputs: &[String]) -> Result<ResolvedFileSet> {
    let mut resolved = Vec::new();
    for input in inputs {
        if is_http_url(input) {
            resolved.push(ResolvedInput::Remote(input.clone()));
            continue;
        }
        let files = glob::find_all_globs(std::slice::from_ref(input)).context("finding all globs")?;
        resolved.extend(files.into_iter().map(ResolvedInput::Local));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn validation_errors(err: &anyhow::Error) -> Vec<String> {
        match err.downcast_ref::<FnpackError>() {
            Some(FnpackError::Validation(failure)) => failure.errors().to_vec(),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_existing_files_and_urls() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.js"), "a")?;
        let inputs = vec![
            dir.path().join("a.js").to_string_lossy().to_string(),
            format!("{}/*.js", dir.path().display()),
            "https://example.com/unreachable.zip".to_string(),
            "http://localhost:1/nothing".to_string(),
        ];
        validate(&inputs)
    }

    #[test]
    fn test_validate_reports_every_missing_input() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("ok.js"), "ok")?;
        let missing_a = dir.path().join("missing-a.js").to_string_lossy().to_string();
        let missing_b = format!("{}/*.py", dir.path().display());
        let inputs = vec![
            missing_a.clone(),
            dir.path().join("ok.js").to_string_lossy().to_string(),
            missing_b.clone(),
        ];

        let err = validate(&inputs).unwrap_err();
        assert_eq!(
            validation_errors(&err),
            vec![
                format!("Error finding any files with path \"{}\"", missing_a),
                format!("Error finding any files with path \"{}\"", missing_b),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_validate_bad_pattern_is_fatal() {
        let err = validate(&["src/[*.js".to_string()]).unwrap_err();
        assert!(err.to_string().contains("finding all globs"));
    }

    #[test]
    fn test_resolve_keeps_order_and_duplicates() -> Result<()> {
        let dir = tempdir()?;
        let a = dir.path().join("a.js");
        fs::write(&a, "a")?;
        let a_str = a.to_string_lossy().to_string();
        let url = "https://example.com/pkg.zip".to_string();

        let resolved = resolve(&[a_str.clone(), url.clone(), a_str])?;
        assert_eq!(
            resolved,
            vec![
                ResolvedInput::Local(a.clone()),
                ResolvedInput::Remote(url),
                ResolvedInput::Local(a),
            ]
        );
        Ok(())
    }
}
