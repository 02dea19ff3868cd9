//! # fnpack Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements configuration loading for fnpack, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.fnpack.toml` in current directory or ancestors
//! 2. User-specific `~/.config/fnpack/config.toml`
//! 3. Default values defined in the code
//!
//! Command-line flags are applied on top by each command handler.
//!
//! ## Examples
//!
//! ```toml
//! [storage]
//! url = "http://storagesvc.fission"
//!
//! [controller]
//! url = "http://controller.fission"
//! namespace = "default"
//!
//! [specs]
//! directory = "specs"
//!
//! [archive]
//! temp_dir = "~/.cache/fnpack"
//! ```
//!
use crate::core::error::{FnpackError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub specs: SpecsConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
}

/// Where uploaded archives go.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Base URL of the storage service. Only needed for archives too large to embed.
    pub url: Option<String>,
}

/// API server used by `fnpack package consumers`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    pub url: Option<String>,
    /// Namespace queried when none is given on the command line.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            url: None,
            namespace: default_namespace(),
        }
    }
}

/// Declarative spec directory settings.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SpecsConfig {
    /// Spec directory (can use ~). Will be expanded.
    #[serde(default = "default_spec_dir")]
    pub directory: String,
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            directory: default_spec_dir(),
        }
    }
}

/// Archive building settings.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Base directory for temporary archives. Defaults to the system temp dir.
    pub temp_dir: Option<String>,
}

fn default_namespace() -> String {
    "default".to_string()
}
fn default_spec_dir() -> String {
    "specs".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".fnpack.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "fnpack", "fnpack") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.fnpack.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.storage.url = project_cfg.storage.url.or(user.storage.url);
    merged.controller.url = project_cfg.controller.url.or(user.controller.url);
    merged.controller.namespace = if project_cfg.controller.namespace != default_namespace() {
        project_cfg.controller.namespace
    } else {
        user.controller.namespace
    };
    merged.specs.directory = if project_cfg.specs.directory != default_spec_dir() {
        project_cfg.specs.directory
    } else {
        user.specs.directory
    };
    merged.archive.temp_dir = project_cfg.archive.temp_dir.or(user.archive.temp_dir);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.specs.directory = shellexpand::tilde(&config.specs.directory).into_owned();
    debug!("Expanded spec directory: {}", config.specs.directory);
    if let Some(temp_dir) = config.archive.temp_dir.as_mut() {
        *temp_dir = shellexpand::tilde(temp_dir.as_str()).into_owned();
        debug!("Expanded archive temp directory: {}", temp_dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    for (section, url) in [
        ("storage", &config.storage.url),
        ("controller", &config.controller.url),
    ] {
        if let Some(url) = url {
            if !is_http_url(url) {
                return Err(anyhow!(FnpackError::Config(format!(
                    "Invalid {} url '{}'. Expected an http:// or https:// URL.",
                    section, url
                ))));
            }
        }
    }
    if config.controller.namespace.trim().is_empty() {
        return Err(anyhow!(FnpackError::Config(
            "Controller namespace cannot be empty.".to_string()
        )));
    }
    if config.specs.directory.trim().is_empty() {
        return Err(anyhow!(FnpackError::Config(
            "Spec directory cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}

/// Returns true when `s` starts with an `http://` or `https://` scheme.
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [storage]
            url = "http://storage.local"

            [controller]
            url = "http://controller.local"

            [specs]
            directory = "~/fn/specs"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.storage.url.as_deref(), Some("http://storage.local"));
        assert_eq!(
            config.controller.url.as_deref(),
            Some("http://controller.local")
        );
        assert_eq!(config.controller.namespace, default_namespace()); // Default
        assert_eq!(config.specs.directory, "~/fn/specs"); // Not yet expanded
        assert!(config.archive.temp_dir.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[storage]\nbucket = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            specs: SpecsConfig {
                directory: "~/specs_test".to_string(),
            },
            archive: ArchiveConfig {
                temp_dir: Some("/absolute/tmp".to_string()),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.specs.directory,
            home_dir.join("specs_test").to_string_lossy()
        );
        assert_eq!(config.archive.temp_dir.as_deref(), Some("/absolute/tmp"));
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            storage: StorageConfig {
                url: Some("http://user-storage".into()),
            },
            controller: ControllerConfig {
                url: Some("http://user-controller".into()),
                namespace: "user-ns".into(),
            },
            ..Default::default()
        };
        let project = Config {
            storage: StorageConfig {
                url: Some("http://project-storage".into()),
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.storage.url.as_deref(), Some("http://project-storage"));
        // Unset in the project file, so the user value survives.
        assert_eq!(
            merged.controller.url.as_deref(),
            Some("http://user-controller")
        );
        assert_eq!(merged.controller.namespace, "user-ns");
        assert_eq!(merged.specs.directory, default_spec_dir());
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config {
            storage: StorageConfig {
                url: Some("https://storage.example".into()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_url() {
        let config = Config {
            controller: ControllerConfig {
                url: Some("controller.local".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid controller url"));
    }

    #[test]
    fn test_validate_config_empty_namespace() {
        let config = Config {
            controller: ControllerConfig {
                url: None,
                namespace: "  ".into(),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
