//! # fnpack Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Archive-related utilities. Function packages are shipped as ZIP
//! archives, so the only submodule today is `zip`, which detects existing
//! ZIP containers and builds new ones.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive;
//! use std::path::Path;
//!
//! if !archive::zip::is_zip(Path::new("./fn.zip"))? {
//!     // package it
//! }
//! ```
//!

pub mod zip;
