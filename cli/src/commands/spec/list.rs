//! # fnpack Spec List Handler
//!
//! File: cli/src/commands/spec/list.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Prints a summary of the spec directory: every archive upload spec with its
//! globs, then the other declared resources with the file they came from.
//!
use crate::common::spec::store::{SpecStore, YamlSpecStore};
use crate::common::spec::types::{FileResources, ARCHIVE_UPLOAD_SPEC_KIND};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "List the documents in the spec directory")]
pub struct ListArgs {
    /// Spec directory. Overrides `specs.directory` from configuration.
    #[arg(long)]
    spec_dir: Option<PathBuf>,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let spec_dir = super::resolve_spec_dir(args.spec_dir)?;
    let resources = YamlSpecStore.read_all(&spec_dir).context("read specs")?;
    print!("{}", render(&resources));
    Ok(())
}

fn render(resources: &FileResources) -> String {
    let mut out = String::new();
    if resources.archive_upload_specs.is_empty() {
        out.push_str("No archive upload specs.\n");
    } else {
        out.push_str("Archive upload specs:\n");
        for spec in &resources.archive_upload_specs {
            out.push_str(&format!(
                "  {}: {}\n",
                spec.name,
                spec.include_globs.join(", ")
            ));
            if !spec.exclude_globs.is_empty() {
                out.push_str(&format!("    exclude: {}\n", spec.exclude_globs.join(", ")));
            }
        }
    }

    let others: Vec<_> = resources
        .resources
        .iter()
        .filter(|r| r.kind != ARCHIVE_UPLOAD_SPEC_KIND)
        .collect();
    if !others.is_empty() {
        out.push_str("Other resources:\n");
        for resource in others {
            out.push_str(&format!(
                "  {}/{} ({})\n",
                resource.kind,
                resource.name.as_deref().unwrap_or("<unnamed>"),
                resource.source.display()
            ));
        }
    }
    out
}
