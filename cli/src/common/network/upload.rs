//! # fnpack Archive Upload (`common::network::upload`)
//!
//! File: cli/src/common/network/upload.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Turns a staged archive (a local file or a remote URL) into an
//! `UploadedArchive` that a package can reference.
//!
//! ## Architecture
//!
//! `HttpUploader` picks one of three routes:
//! - **Remote URL**: the archive is downloaded once to compute its SHA-256,
//!   and the original URL is kept as the reference.
//! - **Small local file** (under 256 KiB): the bytes are embedded as a literal
//!   archive. No network access.
//! - **Large local file**: multipart POST to `<storage>/v1/archive`; the
//!   returned id becomes a download URL.
//!
//! Errors from the storage service are surfaced as-is; nothing is retried.
//!
use crate::core::config::is_http_url;
use crate::core::error::{FnpackError, Result};
use anyhow::{anyhow, Context};
use reqwest::blocking::{multipart, Client};
use reqwest::Url;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Archives smaller than this are embedded instead of uploaded.
pub const ARCHIVE_LITERAL_SIZE_LIMIT: u64 = 256 * 1024;

/// Content checksum of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    pub algorithm: &'static str,
    pub sum: String,
}

impl Checksum {
    pub fn sha256(bytes: &[u8]) -> Self {
        Self {
            algorithm: "sha256",
            sum: hex::encode(Sha256::digest(bytes)),
        }
    }

    pub fn sha256_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open file {:?}", path))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)
            .with_context(|| format!("Failed to read file {:?}", path))?;
        Ok(Self {
            algorithm: "sha256",
            sum: hex::encode(hasher.finalize()),
        })
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.sum)
    }
}

/// What the uploader hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadedArchive {
    Literal { bytes: Vec<u8>, checksum: Checksum },
    Url { url: String, checksum: Checksum },
}

impl fmt::Display for UploadedArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadedArchive::Literal { bytes, checksum } => {
                write!(f, "literal ({} bytes, {})", bytes.len(), checksum)
            }
            UploadedArchive::Url { url, checksum } => write!(f, "url {} ({})", url, checksum),
        }
    }
}

/// Publishes a staged archive.
pub trait ArchiveUploader {
    /// `archive` is either a local path or an `http(s)://` URL.
    fn upload(&self, archive: &str) -> Result<UploadedArchive>;
}

/// Response body of `POST /v1/archive`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}

/// `ArchiveUploader` talking to the storage service over HTTP.
pub struct HttpUploader {
    client: Client,
    storage_url: Option<String>,
}

impl HttpUploader {
    pub fn new(storage_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            storage_url,
        })
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        info!("Downloading {} to compute its checksum", url);
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| anyhow!(FnpackError::Transport(e.to_string())))
            .with_context(|| format!("download archive {}", url))?;
        let bytes = response
            .bytes()
            .map_err(|e| anyhow!(FnpackError::Transport(e.to_string())))
            .with_context(|| format!("download archive {}", url))?;
        Ok(bytes.to_vec())
    }

    fn upload_to_storage(&self, storage_url: &str, path: &Path) -> Result<String> {
        let form = multipart::Form::new()
            .file("uploadfile", path)
            .with_context(|| format!("Failed to read archive {:?}", path))?;
        let endpoint = format!("{}/v1/archive", storage_url.trim_end_matches('/'));
        info!("Uploading {:?} to {}", path, endpoint);
        let response: UploadResponse = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| anyhow!(FnpackError::Transport(e.to_string())))
            .context("upload archive to storage")?;
        debug!("Storage service assigned id {}", response.id);
        Ok(response.id)
    }
}

impl ArchiveUploader for HttpUploader {
    fn upload(&self, archive: &str) -> Result<UploadedArchive> {
        if is_http_url(archive) {
            let bytes = self.download(archive)?;
            return Ok(UploadedArchive::Url {
                url: archive.to_string(),
                checksum: Checksum::sha256(&bytes),
            });
        }

        let path = Path::new(archive);
        let size = fs::metadata(path)
            .with_context(|| format!("open archive {}", archive))?
            .len();
        if size < ARCHIVE_LITERAL_SIZE_LIMIT {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read archive {:?}", path))?;
            debug!("Embedding {} ({} bytes) as a literal archive", archive, size);
            let checksum = Checksum::sha256(&bytes);
            return Ok(UploadedArchive::Literal { bytes, checksum });
        }

        let storage_url = self.storage_url.as_deref().ok_or_else(|| {
            anyhow!(FnpackError::Config(format!(
                "Archive {} is {} bytes, over the {} byte literal limit, and no storage url is configured.",
                archive, size, ARCHIVE_LITERAL_SIZE_LIMIT
            )))
        })?;
        let checksum = Checksum::sha256_file(path)?;
        let id = self.upload_to_storage(storage_url, path)?;
        Ok(UploadedArchive::Url {
            url: archive_download_url(storage_url, &id)?,
            checksum,
        })
    }
}

/// `<storage>/v1/archive?id=<id>`, with the id query-encoded.
pub fn archive_download_url(storage_url: &str, id: &str) -> Result<String> {
    let mut url = Url::parse(&format!("{}/v1/archive", storage_url.trim_end_matches('/')))
        .with_context(|| format!("Invalid storage url {}", storage_url))?;
    url.query_pairs_mut().append_pair("id", id);
    Ok(url.to_string())
}
