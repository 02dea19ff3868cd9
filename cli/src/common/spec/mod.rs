//! # fnpack Spec Directory (`common::spec`)
//!
//! File: cli/src/common/spec/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! The declarative spec directory records *intent*: "package these globs into
//! an archive with this name". Records are reconciled into real archives
//! later, outside fnpack.
//!
//! - **`types`**: record shapes, the `archive://` reference prefix and the
//!   equivalence predicate used for reuse.
//! - **`store`**: the `SpecStore` seam and its YAML implementation.
//!

pub mod store;
pub mod types;
