//! # release-config
//!
//! Resolves a monorepo's release configuration from its project graph, its
//! file map and an optional user config file, and prints the result as JSON.
//!
//! ```sh
//! release-config --project-graph graph.json --file-map file-map.json --config nx.json
//! ```

use anyhow::Result;
use clap::Parser as _;
use release_config::cli::Args;
use release_config::error::ReleaseError;
use release_config::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the JSON outcome
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match release_config::run(&args, &RealSystem::new()) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ReleaseError>()
                    .map_or(1, ReleaseError::exit_code),
            );
        }
    }
}
