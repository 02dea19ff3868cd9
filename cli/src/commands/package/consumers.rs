//! # fnpack Package Consumers Handler
//!
//! File: cli/src/commands/package/consumers.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/fnpack
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Implements `fnpack package consumers`: lists the functions in a namespace
//! whose package reference names the given package. Useful before deleting or
//! replacing a package.
//!
//! The controller has no server-side filter for this, so every function in
//! the namespace is fetched and filtered locally.
//!
use crate::common::network::controller::{ControllerClient, Function, FunctionLister};
use crate::core::config::{self, is_http_url};
use crate::core::error::{FnpackError, Result};
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List the functions referencing a package")]
pub struct ConsumersArgs {
    /// Name of the package.
    #[arg(required = true)]
    name: String,

    /// Namespace to search. Overrides `controller.namespace`.
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Controller URL. Overrides `controller.url`.
    #[arg(long, env = "FNPACK_CONTROLLER_URL")]
    controller_url: Option<String>,
}

/// # Functions By Package (`functions_by_package`)
///
/// Returns every function in `namespace` whose package reference is `name`,
/// in the order the lister returned them. An empty list is not an error.
pub fn functions_by_package<L: FunctionLister + ?Sized>(
    lister: &L,
    name: &str,
    namespace: &str,
) -> Result<Vec<Function>> {
    let functions = lister.function_list(namespace)?;
    Ok(functions
        .into_iter()
        .filter(|f| f.spec.package.package_ref.name == name)
        .collect())
}

pub fn handle_consumers(args: ConsumersArgs) -> Result<()> {
    let config = config::load_config()?;
    let controller_url = args
        .controller_url
        .or(config.controller.url)
        .ok_or_else(|| {
            anyhow!(FnpackError::Config(
                "No controller url configured. Set controller.url in .fnpack.toml or pass --controller-url."
                    .to_string()
            ))
        })?;
    if !is_http_url(&controller_url) {
        return Err(anyhow!(FnpackError::ArgumentParsing(format!(
            "Invalid controller url '{}'. Expected an http:// or https:// URL.",
            controller_url
        ))));
    }
    let namespace = args.namespace.unwrap_or(config.controller.namespace);
    info!(
        "Looking up consumers of package {} in namespace {}",
        args.name, namespace
    );

    let client = ControllerClient::new(controller_url)?;
    let functions = functions_by_package(&client, &args.name, &namespace)?;

    if functions.is_empty() {
        println!(
            "No functions reference package '{}' in namespace '{}'.",
            args.name, namespace
        );
        return Ok(());
    }
    println!("{:<32} {:<20} ENTRYPOINT", "NAME", "NAMESPACE");
    for function in &functions {
        println!(
            "{:<32} {:<20} {}",
            function.metadata.name,
            function.metadata.namespace,
            function.spec.package.function_name
        );
    }
    Ok(())
}
