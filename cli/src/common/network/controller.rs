//! # fnpack Controller API Client (`common::network::controller`)
//!
//! File: cli/src/common/network/controller.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! Read-only access to the function API. Only the fields fnpack needs to find
//! the consumers of a package are modelled; everything else in the response
//! is ignored.
//!
use crate::core::error::{FnpackError, Result};
use anyhow::{anyhow, Context};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionPackageRef {
    #[serde(rename = "packageref", default)]
    pub package_ref: PackageRef,
    #[serde(rename = "functionName", default)]
    pub function_name: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSpec {
    #[serde(default)]
    pub package: FunctionPackageRef,
}

/// A deployed function, as returned by the API.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: FunctionSpec,
}

/// Lists functions in a namespace.
pub trait FunctionLister {
    fn function_list(&self, namespace: &str) -> Result<Vec<Function>>;
}

/// `FunctionLister` over the controller's HTTP API.
pub struct ControllerClient {
    client: Client,
    base_url: String,
}

impl ControllerClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl FunctionLister for ControllerClient {
    fn function_list(&self, namespace: &str) -> Result<Vec<Function>> {
        let endpoint = format!("{}/v2/functions", self.base_url);
        debug!("Listing functions in namespace {} from {}", namespace, endpoint);
        self.client
            .get(&endpoint)
            .query(&[("namespace", namespace)])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| anyhow!(FnpackError::Transport(e.to_string())))
            .with_context(|| format!("list functions in namespace {}", namespace))
    }
}
