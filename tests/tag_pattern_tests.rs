//! Tests for release tag pattern resolution

mod common;

use common::{resolve_err, resolve_ok};
use serde_json::json;

#[test]
fn test_independent_group_gets_project_scoped_pattern() {
    let config = resolve_ok(json!({
        "groups": {
            "libs": { "projects": "lib-*", "projectsRelationship": "independent" },
            "core": { "projects": ["nx"] }
        }
    }));
    assert_eq!(config["releaseTagPattern"], "v{version}");
    assert_eq!(config["groups"]["libs"]["releaseTagPattern"], "{projectName}@{version}");
    assert_eq!(config["groups"]["core"]["releaseTagPattern"], "v{version}");
}

#[test]
fn test_independent_group_honors_workspace_pattern_with_project_name() {
    let config = resolve_ok(json!({
        "releaseTagPattern": "release/{projectName}/{version}",
        "groups": {
            "libs": { "projects": "lib-*", "projectsRelationship": "independent" }
        }
    }));
    assert_eq!(
        config["groups"]["libs"]["releaseTagPattern"],
        "release/{projectName}/{version}"
    );
}

#[test]
fn test_independent_group_ignores_workspace_pattern_without_project_name() {
    let config = resolve_ok(json!({
        "releaseTagPattern": "release-{version}",
        "groups": {
            "libs": { "projects": "lib-*", "projectsRelationship": "independent" },
            "core": { "projects": ["nx"] }
        }
    }));
    assert_eq!(config["groups"]["libs"]["releaseTagPattern"], "{projectName}@{version}");
    assert_eq!(config["groups"]["core"]["releaseTagPattern"], "release-{version}");
}

#[test]
fn test_independent_workspace_default() {
    let config = resolve_ok(json!({ "projectsRelationship": "independent" }));
    assert_eq!(config["releaseTagPattern"], "{projectName}@{version}");
    assert_eq!(
        config["groups"]["__default__"]["releaseTagPattern"],
        "{projectName}@{version}"
    );
}

#[test]
fn test_group_pattern_wins() {
    let config = resolve_ok(json!({
        "groups": {
            "libs": {
                "projects": "lib-*",
                "projectsRelationship": "independent",
                "releaseTagPattern": "libs-v{version}"
            }
        }
    }));
    assert_eq!(config["groups"]["libs"]["releaseTagPattern"], "libs-v{version}");
}

#[test]
fn test_version_placeholder_missing_or_repeated() {
    for pattern in ["v", "{version}-{version}"] {
        let (code, data) = resolve_err(json!({
            "groups": { "libs": { "projects": "lib-*", "releaseTagPattern": pattern } }
        }));
        assert_eq!(
            code,
            "RELEASE_GROUP_RELEASE_TAG_PATTERN_VERSION_PLACEHOLDER_MISSING_OR_EXCESSIVE"
        );
        assert_eq!(data["releaseGroupName"], "libs");
    }

    let (_, data) = resolve_err(json!({ "releaseTagPattern": "latest" }));
    assert_eq!(data["releaseGroupName"], "__default__");
}

#[test]
fn test_tag_pattern_flags_inherit_from_workspace() {
    let config = resolve_ok(json!({
        "releaseTagPatternStrictPreid": true,
        "releaseTagPatternCheckAllBranchesWhen": ["main", "release/*"],
        "groups": {
            "libs": { "projects": "lib-*" },
            "core": {
                "projects": ["nx"],
                "releaseTagPatternStrictPreid": false,
                "releaseTagPatternCheckAllBranchesWhen": true
            }
        }
    }));

    assert_eq!(config["releaseTagPatternStrictPreid"], true);
    assert_eq!(config["groups"]["libs"]["releaseTagPatternStrictPreid"], true);
    assert_eq!(
        config["groups"]["libs"]["releaseTagPatternCheckAllBranchesWhen"],
        json!(["main", "release/*"])
    );
    assert_eq!(config["groups"]["core"]["releaseTagPatternStrictPreid"], false);
    assert_eq!(config["groups"]["core"]["releaseTagPatternCheckAllBranchesWhen"], true);
}
