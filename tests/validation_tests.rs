//! Tests for the order in which rejected rules are reported

mod common;

use common::{outcome, resolve_err};
use serde_json::json;

#[test]
fn test_projects_and_groups_reported_first() {
    let (code, _) = resolve_err(json!({
        "projects": ["lib-a"],
        "groups": { "g": { "projects": ["nope"] } },
        "git": { "commit": true },
        "version": { "git": { "commit": true } }
    }));
    assert_eq!(code, "PROJECTS_AND_GROUPS_DEFINED");
}

#[test]
fn test_git_mixing_before_conventional_commits() {
    let (code, _) = resolve_err(json!({
        "git": { "commit": true },
        "version": { "git": { "commit": true }, "conventionalCommits": true, "specifierSource": "prompt" }
    }));
    assert_eq!(code, "GLOBAL_GIT_CONFIG_MIXED_WITH_GRANULAR_GIT_CONFIG");
}

#[test]
fn test_membership_before_release_checks() {
    let (code, data) = resolve_err(json!({
        "git": { "push": false },
        "changelog": { "workspaceChangelog": { "createRelease": "github" } },
        "groups": {
            "g1": { "projects": ["lib-a"] },
            "g2": { "projects": ["lib-*"] }
        }
    }));
    assert_eq!(code, "PROJECT_MATCHES_MULTIPLE_GROUPS");
    assert_eq!(data["project"], "lib-a");
}

#[test]
fn test_push_check_before_provider_check() {
    let (code, _) = resolve_err(json!({
        "git": { "push": false },
        "changelog": {
            "workspaceChangelog": { "createRelease": { "provider": "unknown", "hostname": "example.org" } }
        }
    }));
    assert_eq!(code, "GIT_PUSH_FALSE_WITH_CREATE_RELEASE");
}

#[test]
fn test_group_checks_run_in_declaration_order() {
    let (code, data) = resolve_err(json!({
        "groups": {
            "first": { "projects": ["lib-a"], "releaseTagPattern": "no-placeholder" },
            "second": {
                "projects": ["lib-b"],
                "changelog": { "createRelease": { "provider": "unknown", "hostname": "example.org" } }
            }
        }
    }));
    assert_eq!(
        code,
        "RELEASE_GROUP_RELEASE_TAG_PATTERN_VERSION_PLACEHOLDER_MISSING_OR_EXCESSIVE"
    );
    assert_eq!(data["releaseGroupName"], "first");
}

#[test]
fn test_error_outcome_has_no_config() {
    let outcome = outcome(json!({ "groups": { "g": { "projects": ["nope"] } } }));
    assert_eq!(
        outcome,
        json!({
            "error": { "code": "RELEASE_GROUP_MATCHES_NO_PROJECTS", "data": { "releaseGroupName": "g" } },
            "nxReleaseConfig": null
        })
    );
}
