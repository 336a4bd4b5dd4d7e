//! `release-config` - resolves the release configuration of a monorepo
//!
//! Given a workspace project graph, the project file map and a sparse user
//! release configuration, this crate produces a fully resolved
//! configuration tree (defaults applied, shorthands expanded, group values
//! inherited from the workspace) or a single structured [`ConfigError`].
//!
//! [`ConfigError`]: error::ConfigError

pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod system;
pub mod workspace;

use anyhow::{Context as _, Result};
use cli::Args;
use config::ReleaseUserConfig;
use error::ReleaseError;
use resolver::{ResolveOutcome, resolve_release_config};
use system::System;
use tracing::info;

/// Main entry point for the release-config binary.
///
/// Prints the resolution outcome as JSON on stdout. A rejected
/// configuration is still printed, then reported as a configuration error.
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let workspace_root = match args.workspace_root {
        Some(ref root) => root.clone(),
        None => system
            .current_dir()
            .context("Failed to determine the current directory")?,
    };

    let graph = workspace::load_project_graph(system, &args.project_graph)?;
    let file_map = workspace::load_file_map(system, &args.file_map)?;
    let user = match args.config {
        Some(ref path) => ReleaseUserConfig::load_from_file(system, path)?,
        None => ReleaseUserConfig::default(),
    };
    info!(
        "Resolving release configuration for {} projects",
        graph.nodes.len()
    );

    let outcome = ResolveOutcome::from(resolve_release_config(
        &graph,
        &file_map,
        &user,
        system,
        &workspace_root,
    ));

    let rendered = if args.compact {
        serde_json::to_string(&outcome)
    } else {
        serde_json::to_string_pretty(&outcome)
    }
    .context("Failed to serialize the resolved release configuration")?;

    // Output to stdout (not using logging)
    println!("{rendered}");

    match outcome.error {
        Some(error) => Err(ReleaseError::configuration(error.to_string()).into()),
        None => Ok(()),
    }
}
