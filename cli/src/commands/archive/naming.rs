//! # Archive Naming (`commands::archive::naming`)
//!
//! File: cli/src/commands/archive/naming.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! ## Overview
//!
//! Derives human-traceable archive names:
//!
//! 1. `"{hint}-{random4}"` when a non-empty hint is given,
//! 2. `random8` when there are no inputs,
//! 3. `"{kubify(inputs[0])}-{random4}"` otherwise.
//!
//! The random part only keeps names from colliding by accident; it is not an
//! identity. Reuse of an existing name is decided by the spec store lookup.
//! Randomness comes from a `RandomSource` so tests can seed it.
//!
use rand::Rng;
#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

/// DNS labels are at most 63 characters.
const MAX_NAME_LEN: usize = 63;
/// Length of the `-xxxx` suffix.
const SUFFIX_LEN: usize = 5;

const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Source of random lowercase alphanumeric strings.
pub trait RandomSource {
    fn alphanumeric(&mut self, len: usize) -> String;
}

/// Thread-local RNG, used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn alphanumeric(&mut self, len: usize) -> String {
        sample(&mut rand::thread_rng(), len)
    }
}

/// Deterministic RNG for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

#[cfg(test)]
impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
impl RandomSource for SeededRandom {
    fn alphanumeric(&mut self, len: usize) -> String {
        sample(&mut self.0, len)
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| NAME_CHARSET[rng.gen_range(0..NAME_CHARSET.len())] as char)
        .collect()
}

/// Names an archive. Not idempotent: every call draws fresh randomness.
pub fn archive_name<R: RandomSource + ?Sized>(
    random: &mut R,
    hint: Option<&str>,
    inputs: &[String],
) -> String {
    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        return format!("{}-{}", hint, random.alphanumeric(4));
    }
    match inputs.first() {
        None => random.alphanumeric(8),
        Some(first) => format!("{}-{}", kubify_name(first), random.alphanumeric(4)),
    }
}

/// Turns an arbitrary path into a DNS-safe name prefix.
///
/// Lowercases, maps everything outside `[a-z0-9-]` to `-`, strips leading
/// non-letters and trailing non-alphanumerics, and truncates so a `-xxxx`
/// suffix still fits in 63 characters. Falls back to `default`.
pub fn kubify_name(input: &str) -> String {
    let mapped: String = input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = trim_name(mapped.trim_start_matches(|c: char| !c.is_ascii_lowercase()));
    // Everything left is ASCII, so byte truncation is safe.
    let truncated = &trimmed[..trimmed.len().min(MAX_NAME_LEN - SUFFIX_LEN)];
    let name = trim_name(truncated);

    if name.is_empty() {
        "default".to_string()
    } else {
        name.to_string()
    }
}

fn trim_name(s: &str) -> &str {
    s.trim_end_matches(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
}
