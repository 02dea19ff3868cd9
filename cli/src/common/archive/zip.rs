//! # fnpack ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module provides the two archive operations fnpack needs: recognising
//! a file that is already a ZIP container, and writing a new ZIP archive from a
//! set of files and directories.
//!
//! ## Architecture
//!
//! - **`is_zip`** sniffs the first four bytes of a file. Detection is by
//!   signature only; a `.zip` extension on a text file does not count, and a
//!   ZIP named `fn.pkg` does.
//! - **`make_archive`** uses the `zip` crate's `ZipWriter` with deflate
//!   compression. Files land at the archive root under their file name;
//!   directories are walked recursively with `walkdir` and keep their own
//!   name as the top-level folder. Repeated sources are written once and
//!   colliding names are made unique, so any valid input set packages.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::zip;
//! use std::path::{Path, PathBuf};
//!
//! let sources = vec![PathBuf::from("hello.js"), PathBuf::from("lib")];
//! let archive = zip::make_archive(Path::new("/tmp/fnpack-archive-42/hello-js-k3x9"), &sources)?;
//! assert!(archive.to_string_lossy().ends_with(".zip"));
//! assert!(zip::is_zip(&archive)?);
//! ```
//!
use crate::core::error::{FnpackError, Result};
use anyhow::{anyhow, Context};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Returns true when `header` starts with a ZIP record signature.
///
/// - Local file header:   PK 03 04
/// - End of central dir:  PK 05 06 (empty archive)
/// - Spanning marker:     PK 07 08
pub fn is_zip_magic(header: &[u8]) -> bool {
    if header.len() < 4 || header[0] != b'P' || header[1] != b'K' {
        return false;
    }
    matches!((header[2], header[3]), (3, 4) | (5, 6) | (7, 8))
}

/// Checks whether the file at `path` is a ZIP archive.
///
/// Files shorter than four bytes are simply not ZIP archives.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or read.
pub fn is_zip(path: &Path) -> Result<bool> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file {:?}", path))?;
    let mut header = Vec::with_capacity(4);
    file.take(4)
        .read_to_end(&mut header)
        .with_context(|| format!("Failed to read header of {:?}", path))?;
    Ok(is_zip_magic(&header))
}

/// Appends `.zip` to `target` unless it already ends with it.
pub fn with_zip_suffix(target: &Path) -> PathBuf {
    if target.extension().is_some_and(|ext| ext == "zip") {
        target.to_path_buf()
    } else {
        let mut name = target.as_os_str().to_owned();
        name.push(".zip");
        PathBuf::from(name)
    }
}

/// # Make Archive (`make_archive`)
///
/// Writes a ZIP archive containing `sources` to `target` (with `.zip`
/// appended when missing) and returns the path actually written.
///
/// A source listed more than once is archived once. Distinct sources whose
/// names collide at the archive root are all kept: the later ones move under
/// their parent directory's name (`lib/index.js`), then get a numeric suffix
/// (`index-2.js`) if that is taken too.
///
/// ## Errors
///
/// Returns an `Err` if the target cannot be created, a source cannot be read
/// or walked, or the archive cannot be finalized.
pub fn make_archive(target: &Path, sources: &[PathBuf]) -> Result<PathBuf> {
    let target = with_zip_suffix(target);
    let file = File::create(&target)
        .with_context(|| format!("Failed to create archive {:?}", target))?;
    let mut builder = ArchiveBuilder::new(file);

    for source in sources {
        let key = fs::canonicalize(source).unwrap_or_else(|_| source.clone());
        if !builder.seen.insert(key) {
            debug!("{:?} already archived, skipping repeat", source);
            continue;
        }
        if source.is_dir() {
            builder.add_directory(source)?;
        } else {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| {
                    anyhow!(FnpackError::Archive(format!(
                        "Cannot determine a file name for {:?}",
                        source
                    )))
                })?;
            let name = builder.unique_root(&name, source);
            builder.add_file(source, &name)?;
        }
    }

    builder
        .writer
        .finish()
        .with_context(|| format!("Failed to finalize archive {:?}", target))?;
    info!("Created archive {:?} from {} source(s)", target, sources.len());
    Ok(target)
}

/// Writer plus the bookkeeping that keeps entry names unique.
struct ArchiveBuilder {
    writer: ZipWriter<File>,
    options: SimpleFileOptions,
    /// Canonical paths of sources already written.
    seen: HashSet<PathBuf>,
    /// Every entry name written, plus every directory prefix (`lib/`) implied by one.
    taken: HashSet<String>,
}

impl ArchiveBuilder {
    fn new(file: File) -> Self {
        Self {
            writer: ZipWriter::new(file),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated),
            seen: HashSet::new(),
            taken: HashSet::new(),
        }
    }

    fn is_free(&self, name: &str) -> bool {
        !name.is_empty()
            && !self.taken.contains(name)
            && !self.taken.contains(&format!("{}/", name))
    }

    /// First free top-level name for `source`, starting from `name`.
    fn unique_root(&self, name: &str, source: &Path) -> String {
        if self.is_free(name) {
            return name.to_string();
        }
        if let Some(parent) = source
            .parent()
            .and_then(Path::file_name)
            .map(|p| p.to_string_lossy().to_string())
        {
            let nested = format!("{}/{}", parent, name);
            if self.is_free(&nested) {
                return nested;
            }
        }
        (2..)
            .map(|n| numbered(name, n))
            .find(|candidate| self.is_free(candidate))
            .unwrap_or_else(|| name.to_string())
    }

    fn claim(&mut self, name: &str) {
        let mut prefix = String::new();
        for part in name.trim_end_matches('/').split('/') {
            if !prefix.is_empty() {
                self.taken.insert(prefix.clone());
            }
            prefix.push_str(part);
            prefix.push('/');
        }
        self.taken.insert(name.to_string());
    }

    fn add_directory(&mut self, dir: &Path) -> Result<()> {
        // `.` and `/` have no name of their own; their contents go to the archive root.
        let root = match dir.file_name() {
            Some(name) => PathBuf::from(self.unique_root(&name.to_string_lossy(), dir)),
            None => PathBuf::new(),
        };
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk directory {:?}", dir))?;
            let relative = entry
                .path()
                .strip_prefix(dir)
                .with_context(|| format!("Unexpected walk entry {:?}", entry.path()))?;
            let name = entry_name(&root.join(relative));
            if name.is_empty() {
                continue;
            }
            if entry.file_type().is_dir() {
                let dir_name = format!("{}/", name);
                if self.taken.contains(&dir_name) {
                    continue;
                }
                self.writer
                    .add_directory(name.clone(), self.options)
                    .with_context(|| format!("Failed to add directory {} to archive", name))?;
                self.claim(&dir_name);
            } else if self.taken.contains(&name) {
                debug!("Entry {} already present, skipping {:?}", name, entry.path());
            } else {
                self.add_file(entry.path(), &name)?;
            }
        }
        Ok(())
    }

    fn add_file(&mut self, path: &Path, name: &str) -> Result<()> {
        debug!("Adding {:?} to archive as {}", path, name);
        let mut source =
            File::open(path).with_context(|| format!("Failed to open file {:?}", path))?;
        self.writer
            .start_file(name, self.options)
            .with_context(|| format!("Failed to start archive entry {}", name))?;
        io::copy(&mut source, &mut self.writer)
            .with_context(|| format!("Failed to write {:?} into archive", path))?;
        self.claim(name);
        Ok(())
    }
}

/// `index.js` -> `index-2.js`; names without an extension get the suffix at the end.
fn numbered(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}-{}{}", &name[..dot], n, &name[dot..]),
        _ => format!("{}-{}", name, n),
    }
}

/// ZIP entry names always use `/`, whatever the host separator is.
fn entry_name(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn entry_names(path: &Path) -> Vec<String> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_is_zip_magic() {
        assert!(is_zip_magic(b"PK\x03\x04rest"));
        assert!(is_zip_magic(b"PK\x05\x06"));
        assert!(!is_zip_magic(b"PK\x01"));
        assert!(!is_zip_magic(b"hello world"));
    }

    #[test]
    fn test_is_zip_uses_signature_not_extension() -> Result<()> {
        let dir = tempdir()?;
        let fake = dir.path().join("fake.zip");
        fs::write(&fake, "not a zip")?;
        assert!(!is_zip(&fake)?);

        let real = make_archive(&dir.path().join("real.pkg"), &[fake.clone()])?;
        assert!(is_zip(&real)?);

        let tiny = dir.path().join("tiny");
        fs::write(&tiny, "P")?;
        assert!(!is_zip(&tiny)?);
        Ok(())
    }

    #[test]
    fn test_with_zip_suffix() {
        assert_eq!(with_zip_suffix(Path::new("/tmp/a")), PathBuf::from("/tmp/a.zip"));
        assert_eq!(
            with_zip_suffix(Path::new("/tmp/a.zip")),
            PathBuf::from("/tmp/a.zip")
        );
        assert_eq!(
            with_zip_suffix(Path::new("/tmp/hello-js-ab12")),
            PathBuf::from("/tmp/hello-js-ab12.zip")
        );
    }

    #[test]
    fn test_make_archive_files_and_directories() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.js"), "a")?;
        fs::create_dir_all(dir.path().join("lib/util"))?;
        fs::write(dir.path().join("lib/index.js"), "i")?;
        fs::write(dir.path().join("lib/util/x.js"), "x")?;

        let archive = make_archive(
            &dir.path().join("out"),
            &[dir.path().join("a.js"), dir.path().join("lib")],
        )?;

        assert_eq!(archive, dir.path().join("out.zip"));
        assert_eq!(
            entry_names(&archive),
            vec!["a.js", "lib/", "lib/index.js", "lib/util/", "lib/util/x.js"]
        );
        Ok(())
    }

    #[test]
    fn test_make_archive_preserves_content() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("hello.js"), "module.exports = 1;")?;
        let archive = make_archive(&dir.path().join("out"), &[dir.path().join("hello.js")])?;

        let mut zip = ZipArchive::new(File::open(&archive)?)?;
        let mut content = String::new();
        zip.by_name("hello.js")?.read_to_string(&mut content)?;
        assert_eq!(content, "module.exports = 1;");
        Ok(())
    }

    #[test]
    fn test_make_archive_repeated_source_written_once() -> Result<()> {
        let dir = tempdir()?;
        let a = dir.path().join("a.js");
        fs::write(&a, "a")?;
        fs::create_dir(dir.path().join("lib"))?;
        fs::write(dir.path().join("lib/x.js"), "x")?;
        let lib = dir.path().join("lib");

        let archive = make_archive(
            &dir.path().join("out"),
            &[a.clone(), a, lib.clone(), lib],
        )?;

        assert_eq!(entry_names(&archive), vec!["a.js", "lib/", "lib/x.js"]);
        Ok(())
    }

    #[test]
    fn test_make_archive_same_file_name_kept_apart() -> Result<()> {
        let dir = tempdir()?;
        for sub in ["src", "lib"] {
            fs::create_dir(dir.path().join(sub))?;
            fs::write(dir.path().join(sub).join("index.js"), sub)?;
        }

        let archive = make_archive(
            &dir.path().join("out"),
            &[
                dir.path().join("src/index.js"),
                dir.path().join("lib/index.js"),
            ],
        )?;

        assert_eq!(entry_names(&archive), vec!["index.js", "lib/index.js"]);
        let mut zip = ZipArchive::new(File::open(&archive)?)?;
        let mut content = String::new();
        zip.by_name("lib/index.js")?.read_to_string(&mut content)?;
        assert_eq!(content, "lib");
        Ok(())
    }

    #[test]
    fn test_make_archive_numbers_names_when_parent_taken_too() -> Result<()> {
        let dir = tempdir()?;
        for sub in ["a/lib", "b/lib"] {
            fs::create_dir_all(dir.path().join(sub))?;
            fs::write(dir.path().join(sub).join("index.js"), sub)?;
        }
        fs::write(dir.path().join("index.js"), "root")?;

        let archive = make_archive(
            &dir.path().join("out"),
            &[
                dir.path().join("index.js"),
                dir.path().join("a/lib/index.js"),
                dir.path().join("b/lib/index.js"),
            ],
        )?;

        assert_eq!(
            entry_names(&archive),
            vec!["index-2.js", "index.js", "lib/index.js"]
        );
        Ok(())
    }

    #[test]
    fn test_make_archive_same_named_directories_kept_apart() -> Result<()> {
        let dir = tempdir()?;
        for sub in ["a/lib", "b/lib"] {
            fs::create_dir_all(dir.path().join(sub))?;
            fs::write(dir.path().join(sub).join("x.js"), sub)?;
        }

        let archive = make_archive(
            &dir.path().join("out"),
            &[dir.path().join("a/lib"), dir.path().join("b/lib")],
        )?;

        assert_eq!(
            entry_names(&archive),
            vec!["b/lib/", "b/lib/x.js", "lib/", "lib/x.js"]
        );
        Ok(())
    }

    #[test]
    fn test_numbered() {
        assert_eq!(numbered("index.js", 2), "index-2.js");
        assert_eq!(numbered("Makefile", 3), "Makefile-3");
        assert_eq!(numbered(".env", 2), ".env-2");
    }

    #[test]
    fn test_make_archive_missing_source_fails() -> Result<()> {
        let dir = tempdir()?;
        let result = make_archive(&dir.path().join("out"), &[dir.path().join("gone.js")]);
        assert!(result.is_err());
        Ok(())
    }
}
