//! Shared workspace fixture for resolver tests
//!
//! Candidates after selection are `lib-a`, `lib-b`, `nx` and `root`; the
//! other nodes are excluded for one reason each.

#![allow(dead_code)]

use release_config::config::{ReleaseConfig, ReleaseUserConfig};
use release_config::error::ConfigError;
use release_config::resolver::{ResolveOutcome, resolve_release_config};
use release_config::system::MockSystem;
use release_config::workspace::{
    FileData, ProjectFileMap, ProjectGraph, ProjectGraphNode, ProjectType,
    RELEASE_PUBLISH_TARGET,
};
use serde_json::Value;
use std::path::Path;

pub const WORKSPACE_ROOT: &str = "/workspace";

pub fn fixture_graph() -> ProjectGraph {
    ProjectGraph::from_nodes([
        ProjectGraphNode::new("lib-a", ProjectType::Lib, "libs/lib-a"),
        ProjectGraphNode::new("lib-b", ProjectType::Lib, "libs/lib-b"),
        ProjectGraphNode::new("nx", ProjectType::Lib, "packages/nx"),
        ProjectGraphNode::new("root", ProjectType::Lib, "."),
        ProjectGraphNode::new("my-app", ProjectType::App, "apps/my-app"),
        ProjectGraphNode::new("my-app-e2e", ProjectType::E2e, "apps/my-app-e2e"),
        ProjectGraphNode::new("private-lib", ProjectType::Lib, "libs/private-lib"),
        ProjectGraphNode::new("rust-lib", ProjectType::Lib, "libs/rust-lib"),
    ])
}

pub fn fixture_file_map() -> ProjectFileMap {
    let files = |paths: &[&str]| paths.iter().map(|p| FileData::new(p)).collect::<Vec<_>>();

    [
        ("lib-a", files(&["libs/lib-a/package.json", "libs/lib-a/index.ts"])),
        ("lib-b", files(&["libs/lib-b/package.json"])),
        ("nx", files(&["packages/nx/package.json"])),
        ("root", files(&["package.json"])),
        ("my-app", files(&["apps/my-app/package.json"])),
        ("my-app-e2e", files(&["apps/my-app-e2e/package.json"])),
        ("private-lib", files(&["libs/private-lib/package.json"])),
        ("rust-lib", files(&["libs/rust-lib/cargo.toml"])),
    ]
    .into_iter()
    .map(|(name, files)| (name.to_owned(), files))
    .collect()
}

pub fn fixture_system() -> MockSystem {
    let manifest = |name: &str| format!(r#"{{ "name": "{name}", "version": "0.0.1" }}"#);

    MockSystem::new()
        .with_current_dir(WORKSPACE_ROOT)
        .with_file("/workspace/libs/lib-a/package.json", manifest("lib-a").as_bytes())
        .with_file("/workspace/libs/lib-b/package.json", manifest("lib-b").as_bytes())
        .with_file("/workspace/packages/nx/package.json", manifest("nx").as_bytes())
        .with_file("/workspace/package.json", manifest("root").as_bytes())
        .with_file("/workspace/apps/my-app/package.json", manifest("my-app").as_bytes())
        .with_file(
            "/workspace/apps/my-app-e2e/package.json",
            manifest("my-app-e2e").as_bytes(),
        )
        .with_file(
            "/workspace/libs/private-lib/package.json",
            br#"{ "name": "private-lib", "private": true }"#,
        )
}

/// Fixture graph with the publishable app added
pub fn graph_with_publishable_app() -> ProjectGraph {
    let mut graph = fixture_graph();
    graph.nodes.insert(
        "my-app".to_owned(),
        ProjectGraphNode::new("my-app", ProjectType::App, "apps/my-app")
            .with_target(RELEASE_PUBLISH_TARGET),
    );
    graph
}

pub fn user_config(value: Value) -> ReleaseUserConfig {
    serde_json::from_value(value).unwrap()
}

/// Resolve a user config given as JSON against the fixture workspace
pub fn resolve(value: Value) -> Result<ReleaseConfig, ConfigError> {
    resolve_release_config(
        &fixture_graph(),
        &fixture_file_map(),
        &user_config(value),
        &fixture_system(),
        Path::new(WORKSPACE_ROOT),
    )
}

/// Resolve and return the resolved config as JSON
pub fn resolve_ok(value: Value) -> Value {
    serde_json::to_value(resolve(value).unwrap()).unwrap()
}

/// Resolve and return the error code and payload
pub fn resolve_err(value: Value) -> (String, Value) {
    let err = resolve(value).unwrap_err();
    (err.code().to_owned(), err.data())
}

/// Resolve and return the outcome as JSON
pub fn outcome(value: Value) -> Value {
    serde_json::to_value(ResolveOutcome::from(resolve(value))).unwrap()
}
