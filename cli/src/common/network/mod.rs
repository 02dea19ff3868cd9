//! # fnpack Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!

//! ## Overview
//!
//! HTTP collaborators of fnpack. All clients are `reqwest::blocking`
//! clients: fnpack runs one operation at a time and has no async runtime.
//! No timeouts or retries are added here; a hung request blocks the command.
//!
//! ## Architecture
//!
//! - **`upload`**: the `ArchiveUploader` seam, `HttpUploader` (literal
//!   embedding, storage service upload, URL checksumming) and the
//!   `UploadedArchive` / `Checksum` types.
//! - **`controller`**: the `FunctionLister` seam and `ControllerClient`,
//!   used to look up which functions reference a package.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::upload::{ArchiveUploader, HttpUploader};
//!
//! let uploader = HttpUploader::new(Some("http://storagesvc".to_string()))?;
//! let uploaded = uploader.upload("/tmp/fnpack-archive-42/hello-js-k3x9.zip")?;
//! println!("{}", uploaded);
//! ```
//!

/// Function API client.
pub mod controller;
/// Archive upload to the storage service.
pub mod upload;
