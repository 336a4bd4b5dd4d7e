//! Selection of the projects that can take part in a release

use crate::system::System;
use crate::workspace::{
    ProjectFileMap, ProjectGraph, ProjectGraphNode, ProjectType, RELEASE_PUBLISH_TARGET,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Release-relevant facts about one project graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasableProject {
    pub name: String,
    pub root: String,
    pub project_type: ProjectType,
    /// Declares the publish target that makes an application releasable
    pub has_publish_target: bool,
    /// Owns a `package.json` in its file map
    pub has_manifest: bool,
    /// Manifest carries a truthy `private` field
    pub is_private: bool,
}

impl ReleasableProject {
    /// Gather the facts for a node. The manifest is only read when the
    /// project owns one.
    pub fn inspect(
        node: &ProjectGraphNode,
        file_map: &ProjectFileMap,
        system: &dyn System,
        workspace_root: &Path,
    ) -> Self {
        let manifest_path = node.manifest_path();
        let has_manifest = owns_manifest(node, file_map, &manifest_path);
        let is_private = has_manifest && manifest_is_private(system, &workspace_root.join(&manifest_path));

        Self {
            name: node.name.clone(),
            root: node.data.root.clone(),
            project_type: node.project_type,
            has_publish_target: node.has_target(RELEASE_PUBLISH_TARGET),
            has_manifest,
            is_private,
        }
    }

    /// Whether the project passes every selection rule
    #[must_use]
    pub const fn is_releasable(&self) -> bool {
        let releasable_type = match self.project_type {
            ProjectType::Lib => true,
            ProjectType::App => self.has_publish_target,
            ProjectType::E2e => false,
        };
        releasable_type && self.has_manifest && !self.is_private
    }
}

/// Select the releasable projects, in graph (name) order
pub fn select_releasable_projects(
    graph: &ProjectGraph,
    file_map: &ProjectFileMap,
    system: &dyn System,
    workspace_root: &Path,
) -> Vec<ReleasableProject> {
    graph
        .nodes
        .values()
        .map(|node| ReleasableProject::inspect(node, file_map, system, workspace_root))
        .filter(|project| {
            let keep = project.is_releasable();
            if !keep {
                debug!(
                    "Excluding \"{}\" from release candidates (type: {:?}, manifest: {}, private: {})",
                    project.name, project.project_type, project.has_manifest, project.is_private
                );
            }
            keep
        })
        .collect()
}

fn owns_manifest(node: &ProjectGraphNode, file_map: &ProjectFileMap, manifest_path: &Path) -> bool {
    let manifest_path = normalize(manifest_path);
    file_map.get(&node.name).is_some_and(|files| {
        files
            .iter()
            .any(|file| normalize(Path::new(&file.file)) == manifest_path)
    })
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

/// A manifest that cannot be read or parsed excludes the project
fn manifest_is_private(system: &dyn System, path: &Path) -> bool {
    let Ok(content) = system.read_to_string(path) else {
        debug!("Could not read manifest {}", path.display());
        return true;
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(manifest) => manifest.get("private").is_some_and(is_truthy),
        Err(e) => {
            debug!("Could not parse manifest {}: {e}", path.display());
            true
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match *value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(ref number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(ref text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
