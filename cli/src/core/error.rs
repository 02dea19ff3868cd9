//! # fnpack Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module defines the error types used throughout fnpack. It provides a
//! consistent approach to error management with detailed error information and
//! context.
//!
//! ## Architecture
//!
//! The error system consists of three components:
//! - `FnpackError`: A custom error enum using `thiserror` for specific error kinds
//! - `ErrorList` / `ValidationFailure`: an explicit accumulator for input validation,
//!   so every broken input is reported in one go instead of one per run
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! let mut errors = ErrorList::new();
//! for input in inputs {
//!     if !exists(input) {
//!         errors.push(format!("Error finding any files with path \"{}\"", input));
//!     }
//! }
//! errors.into_result()?; // Ok(()) when nothing was pushed
//! ```
//!
use std::fmt;
use thiserror::Error;

/// Custom error type for the fnpack application.
#[derive(Error, Debug)]
pub enum FnpackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Spec error: {0}")]
    Spec(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Non-empty list of input validation errors.
///
/// Only `ErrorList::into_result` builds one, so `errors` always has at least
/// one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: Vec<String>,
}

impl ValidationFailure {
    /// The individual error messages, in the order they were collected.
    #[cfg(test)]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 {
            "error"
        } else {
            "errors"
        };
        write!(f, "{} {} occurred:", self.errors.len(), noun)?;
        for err in &self.errors {
            write!(f, "\n\t* {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Growable accumulator threaded through validation.
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<String>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was collected, otherwise every collected error.
    pub fn into_result(self) -> std::result::Result<(), ValidationFailure> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FnpackError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let spec_err = FnpackError::Spec("bad document".into());
        assert_eq!(spec_err.to_string(), "Spec error: bad document");
    }

    #[test]
    fn test_empty_error_list_is_ok() {
        let errors = ErrorList::new();
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_error_list_keeps_every_entry() {
        let mut errors = ErrorList::new();
        errors.push("first");
        errors.push("second");
        let failure = errors.into_result().unwrap_err();
        assert_eq!(failure.errors(), ["first", "second"]);
        assert_eq!(
            failure.to_string(),
            "2 errors occurred:\n\t* first\n\t* second"
        );
    }

    #[test]
    fn test_single_validation_error_display() {
        let mut errors = ErrorList::new();
        errors.push("only");
        let err = FnpackError::from(errors.into_result().unwrap_err());
        assert_eq!(err.to_string(), "1 error occurred:\n\t* only");
    }
}
