//! # fnpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!

//! ## Overview
//!
//! This module acts as the organizational unit for all filesystem-related
//! utility functions within fnpack.
//!
//! ## Architecture
//!
//! - **`glob`**: Expands archive input patterns into concrete paths (`find_all_globs`).
//! - **`io`**: Directory creation, reading files, appending to files.
//! - **`temp`**: The process-scoped directory freshly built archives are written to.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{glob, temp};
//!
//! let files = glob::find_all_globs(&["src/*.js"])?;
//! let archive_dir = temp::archive_temp_dir(None)?;
//! ```
//!

/// Glob expansion of archive inputs (e.g., `find_all_globs`).
pub mod glob;
/// Basic file I/O operations (e.g., `ensure_dir_exists`, `append_string_to_file`).
pub mod io;
/// Process-scoped temporary archive directory.
pub mod temp;
