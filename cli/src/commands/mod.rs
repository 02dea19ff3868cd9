//! # fnpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Aggregates the top-level command groups of the fnpack CLI so `main.rs` can
//! route to them.
//!
//! ## Command Groups
//!
//! - `archive`: stage archives from files, globs, directories or URLs
//! - `package`: questions about existing packages
//! - `spec`: manage the declarative spec directory
//!
//! Each group defines its own arguments struct and handler; subcommands are
//! declared in the group's own `mod.rs`.
//!

/// Command group for staging archives. Includes `create`.
pub mod archive;
/// Command group for existing packages. Includes `consumers`.
pub mod package;
/// Command group for the spec directory. Includes `init` and `list`.
pub mod spec;
