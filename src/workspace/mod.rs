//! Workspace inputs: the project graph and the project file map
//!
//! Both are produced by the surrounding build tooling and handed to the
//! resolver as-is. They are read from JSON files on the CLI path.

use crate::error::ReleaseError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Target whose presence makes an application project releasable
pub const RELEASE_PUBLISH_TARGET: &str = "nx-release-publish";

/// Manifest file every releasable project must own
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Kind of project node in the graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    App,
    Lib,
    E2e,
}

/// Project-specific data attached to a graph node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    /// Project root relative to the workspace root
    pub root: String,

    /// Targets declared by the project, keyed by target name
    #[serde(default)]
    pub targets: BTreeMap<String, Value>,
}

/// A single node in the project graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGraphNode {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub data: ProjectData,
}

impl ProjectGraphNode {
    /// Create a node with no targets
    #[must_use]
    pub fn new(name: &str, project_type: ProjectType, root: &str) -> Self {
        Self {
            name: name.to_owned(),
            project_type,
            data: ProjectData {
                root: root.to_owned(),
                targets: BTreeMap::new(),
            },
        }
    }

    /// Add a target (builder pattern)
    #[must_use]
    pub fn with_target(mut self, target: &str) -> Self {
        self.data
            .targets
            .insert(target.to_owned(), Value::Object(serde_json::Map::new()));
        self
    }

    /// Whether the project declares the given target
    #[must_use]
    pub fn has_target(&self, target: &str) -> bool {
        self.data.targets.contains_key(target)
    }

    /// Path of the project's manifest relative to the workspace root
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        let root = self.data.root.trim_end_matches('/');
        if root.is_empty() || root == "." {
            PathBuf::from(MANIFEST_FILE_NAME)
        } else {
            Path::new(root).join(MANIFEST_FILE_NAME)
        }
    }
}

/// The workspace project graph, nodes keyed (and iterated) by project name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectGraph {
    #[serde(default)]
    pub nodes: BTreeMap<String, ProjectGraphNode>,
}

impl ProjectGraph {
    /// Build a graph from a list of nodes
    #[must_use]
    pub fn from_nodes<I: IntoIterator<Item = ProjectGraphNode>>(nodes: I) -> Self {
        Self {
            nodes: nodes
                .into_iter()
                .map(|node| (node.name.clone(), node))
                .collect(),
        }
    }
}

/// A source file owned by a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileData {
    pub file: String,
    #[serde(default)]
    pub hash: String,
}

impl FileData {
    #[must_use]
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_owned(),
            hash: String::new(),
        }
    }
}

/// Project name -> files owned by that project
pub type ProjectFileMap = BTreeMap<String, Vec<FileData>>;

/// Load the project graph from a JSON file
pub fn load_project_graph(system: &dyn System, path: &Path) -> Result<ProjectGraph> {
    load_json(system, path, "project graph")
}

/// Load the project file map from a JSON file
pub fn load_file_map(system: &dyn System, path: &Path) -> Result<ProjectFileMap> {
    load_json(system, path, "project file map")
}

fn load_json<T: DeserializeOwned>(system: &dyn System, path: &Path, what: &str) -> Result<T> {
    if !system.exists(path) {
        return Err(ReleaseError::filesystem(format!(
            "The {what} file was not found: {}",
            path.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read {what} file: {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        ReleaseError::input(format!(
            "Failed to parse {what} in {}: {e}",
            path.display()
        ))
        .into()
    })
}
