//! # Archive Materializer (`commands::archive::materialize`)
//!
//! File: cli/src/commands/archive/materialize.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! Builds `<temp dir>/<name>.zip` from the inputs. The inputs are expanded
//! again here so the archive reflects what is on disk right now. Any failure
//! aborts the command; nothing is retried and nothing is cleaned up.
//!
use crate::commands::archive::inputs::{self, ResolvedInput};
use crate::common::archive::zip;
use crate::common::fs::temp;
use crate::core::error::{FnpackError, Result};
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing::info;

/// Packages `inputs` into a new archive named `name` and returns its path.
///
/// `temp_base` overrides the system temp directory as the parent of the
/// process-scoped archive directory.
pub fn materialize(inputs: &[String], name: &str, temp_base: Option<&Path>) -> Result<PathBuf> {
    let mut sources = Vec::new();
    for entry in inputs::resolve(inputs)? {
        match entry {
            ResolvedInput::Local(path) => sources.push(path),
            ResolvedInput::Remote(url) => bail!(FnpackError::Archive(format!(
                "Remote input {} cannot be packaged together with other inputs",
                url
            ))),
        }
    }

    let temp_dir =
        temp::archive_temp_dir(temp_base).context("create temporary archive directory")?;
    let archive =
        zip::make_archive(&temp_dir.join(name), &sources).context("create archive file")?;
    info!("Packaged {} input(s) into {:?}", sources.len(), archive);
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_materialize_builds_zip_in_temp_dir() -> Result<()> {
        let work = tempdir()?;
        let base = tempdir()?;
        fs::write(work.path().join("a.js"), "a")?;
        fs::write(work.path().join("b.js"), "b")?;
        let inputs = vec![format!("{}/*.js", work.path().display())];

        let archive = materialize(&inputs, "fn-abcd", Some(base.path()))?;

        assert_eq!(archive.file_name().unwrap(), "fn-abcd.zip");
        assert!(archive.starts_with(base.path()));
        assert!(zip::is_zip(&archive)?);
        Ok(())
    }

    fn entry_names(archive: &Path) -> Result<Vec<String>> {
        let reader = ::zip::ZipArchive::new(fs::File::open(archive)?)?;
        let mut names: Vec<String> = reader.file_names().map(str::to_string).collect();
        names.sort();
        Ok(names)
    }

    #[test]
    fn test_materialize_repeated_input() -> Result<()> {
        let work = tempdir()?;
        let base = tempdir()?;
        fs::write(work.path().join("a.js"), "a")?;
        let a = work.path().join("a.js").to_string_lossy().to_string();

        let archive = materialize(&[a.clone(), a], "dup", Some(base.path()))?;

        assert_eq!(entry_names(&archive)?, vec!["a.js"]);
        Ok(())
    }

    #[test]
    fn test_materialize_same_file_name_in_two_dirs() -> Result<()> {
        let work = tempdir()?;
        let base = tempdir()?;
        for sub in ["src", "lib"] {
            fs::create_dir(work.path().join(sub))?;
            fs::write(work.path().join(sub).join("index.js"), sub)?;
        }
        let inputs = vec![format!("{}/*/index.js", work.path().display())];

        let archive = materialize(&inputs, "twins", Some(base.path()))?;

        // Glob matches come back sorted, so `lib/index.js` claims the root name.
        assert_eq!(entry_names(&archive)?, vec!["index.js", "src/index.js"]);
        Ok(())
    }

    #[test]
    fn test_materialize_rejects_remote_inputs() -> Result<()> {
        let work = tempdir()?;
        fs::write(work.path().join("a.js"), "a")?;
        let inputs = vec![
            work.path().join("a.js").to_string_lossy().to_string(),
            "https://example.com/b.zip".to_string(),
        ];
        let err = materialize(&inputs, "mixed", Some(work.path())).unwrap_err();
        assert!(err.to_string().contains("cannot be packaged"));
        Ok(())
    }

    #[test]
    fn test_materialize_temp_dir_failure() -> Result<()> {
        let work = tempdir()?;
        fs::write(work.path().join("a.js"), "a")?;
        let blocker = work.path().join("blocker");
        fs::write(&blocker, "")?;
        let inputs = vec![work.path().join("a.js").to_string_lossy().to_string()];

        let err = materialize(&inputs, "fn", Some(&blocker)).unwrap_err();
        assert!(err
            .to_string()
            .contains("create temporary archive directory"));
        Ok(())
    }
}
