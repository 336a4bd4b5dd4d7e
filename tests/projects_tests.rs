//! Tests for releasable project selection

mod common;

use common::{WORKSPACE_ROOT, fixture_file_map, fixture_graph, fixture_system, graph_with_publishable_app};
use release_config::resolver::projects::select_releasable_projects;
use release_config::system::MockSystem;
use release_config::workspace::{FileData, ProjectGraph, ProjectGraphNode, ProjectType};
use std::path::Path;

fn names(graph: &ProjectGraph, system: &MockSystem) -> Vec<String> {
    select_releasable_projects(graph, &fixture_file_map(), system, Path::new(WORKSPACE_ROOT))
        .into_iter()
        .map(|project| project.name)
        .collect()
}

#[test]
fn test_fixture_candidates() {
    assert_eq!(
        names(&fixture_graph(), &fixture_system()),
        vec!["lib-a", "lib-b", "nx", "root"]
    );
}

#[test]
fn test_app_needs_publish_target() {
    let selected = names(&graph_with_publishable_app(), &fixture_system());
    assert!(selected.contains(&"my-app".to_owned()));
}

#[test]
fn test_e2e_project_is_excluded_even_with_publish_target() {
    let mut graph = fixture_graph();
    graph.nodes.insert(
        "my-app-e2e".to_owned(),
        ProjectGraphNode::new("my-app-e2e", ProjectType::E2e, "apps/my-app-e2e")
            .with_target("nx-release-publish"),
    );
    assert!(!names(&graph, &fixture_system()).contains(&"my-app-e2e".to_owned()));
}

#[test]
fn test_private_manifest_is_excluded() {
    let system = fixture_system().with_file("/workspace/libs/lib-b/package.json", br#"{ "private": "true" }"#);
    assert_eq!(names(&fixture_graph(), &system), vec!["lib-a", "nx", "root"]);
}

#[test]
fn test_private_false_is_kept() {
    let system = fixture_system().with_file("/workspace/libs/lib-b/package.json", br#"{ "private": false }"#);
    assert!(names(&fixture_graph(), &system).contains(&"lib-b".to_owned()));
}

#[test]
fn test_unreadable_manifest_is_excluded() {
    let system = fixture_system().with_file("/workspace/packages/nx/package.json", b"{ not json");
    assert!(!names(&fixture_graph(), &system).contains(&"nx".to_owned()));
}

#[test]
fn test_manifest_must_be_in_file_map() {
    let mut file_map = fixture_file_map();
    file_map.insert("lib-a".to_owned(), vec![FileData::new("libs/lib-a/index.ts")]);

    let selected: Vec<String> = select_releasable_projects(
        &fixture_graph(),
        &file_map,
        &fixture_system(),
        Path::new(WORKSPACE_ROOT),
    )
    .into_iter()
    .map(|project| project.name)
    .collect();
    assert_eq!(selected, vec!["lib-b", "nx", "root"]);
}

#[test]
fn test_excluded_projects_never_reach_groups() {
    let config = common::resolve_ok(serde_json::json!({}));
    let members = &config["groups"]["__default__"]["projects"];
    for excluded in ["my-app", "my-app-e2e", "private-lib", "rust-lib"] {
        assert!(!members.as_array().unwrap().iter().any(|m| m == excluded));
    }
}
