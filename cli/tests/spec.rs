//! # fnpack CLI Spec Integration Tests
//!
//! File: cli/tests/spec.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! `fnpack spec init` and `fnpack spec list` against a scratch directory.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_default_spec_dir() {
    let dir = tempdir().unwrap();

    fnpack_in(dir.path())
        .args(["spec", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spec directory ready"));
    assert!(dir.path().join("specs").is_dir());
}

#[test]
fn test_list_after_archive_create() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "a").unwrap();
    fs::write(dir.path().join("b.js"), "b").unwrap();

    fnpack_in(dir.path())
        .args(["spec", "init", "--spec-dir", "deploy"])
        .assert()
        .success();
    fs::write(
        dir.path().join("deploy/function.yaml"),
        "kind: Function\nmetadata:\n  name: hello\n",
    )
    .unwrap();
    fnpack_in(dir.path())
        .args([
            "archive", "create", "a.js", "b.js", "--spec-dir", "deploy", "--spec-file",
            "pkg.yaml", "--name", "hello",
        ])
        .assert()
        .success();

    fnpack_in(dir.path())
        .args(["spec", "list", "--spec-dir", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive upload specs:"))
        .stdout(predicate::str::contains("a.js, b.js"))
        .stdout(predicate::str::contains("Function/hello"));
}

#[test]
fn test_list_without_spec_dir_fails() {
    let dir = tempdir().unwrap();

    fnpack_in(dir.path())
        .args(["spec", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fnpack spec init"));
}

#[test]
fn test_list_rejects_document_without_kind() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("specs")).unwrap();
    fs::write(dir.path().join("specs/bad.yaml"), "name: nothing\n").unwrap();

    fnpack_in(dir.path())
        .args(["spec", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without a kind"));
}
