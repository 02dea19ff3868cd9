//! # fnpack Temporary Archive Directory (`common::fs::temp`)
//!
//! File: cli/src/common/fs/temp.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! Process-scoped directory for freshly built archives. The directory name
//! carries the process id, so every call within one run returns the same
//! path. Nothing here removes it afterwards.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use std::path::{Path, PathBuf};

/// Returns `<base>/fnpack-archive-<pid>`, creating it if needed.
///
/// `base` defaults to the system temp directory.
pub fn archive_temp_dir(base: Option<&Path>) -> Result<PathBuf> {
    let base = base.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);
    let dir = base.join(format!("fnpack-archive-{}", std::process::id()));
    io::ensure_dir_exists(&dir)?;
    Ok(dir)
}
