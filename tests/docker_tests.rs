//! Tests for docker options and their effect on semver tag checks

mod common;

use common::resolve_ok;
use serde_json::json;

#[test]
fn test_docker_is_absent_by_default() {
    let config = resolve_ok(json!({}));
    assert!(config.get("docker").is_none());
    assert!(config["groups"]["__default__"].get("docker").is_none());
}

#[test]
fn test_docker_true_expands_to_defaults() {
    let config = resolve_ok(json!({ "docker": true }));
    assert_eq!(
        config["docker"],
        json!({
            "preVersionCommand": "npx nx run-many -t docker:build",
            "groupPreVersionCommand": "",
            "versionSchemes": {
                "production": "{currentDate|YYMM.DD}.{shortCommitSha}",
                "hotfix": "{currentDate|YYMM.DD}.{shortCommitSha}-hotfix"
            }
        })
    );
    assert_eq!(
        config["groups"]["__default__"]["docker"],
        json!({
            "groupPreVersionCommand": "",
            "versionSchemes": {
                "production": "{currentDate|YYMM.DD}.{shortCommitSha}",
                "hotfix": "{currentDate|YYMM.DD}.{shortCommitSha}-hotfix"
            }
        })
    );
}

#[test]
fn test_docker_disables_semver_requirement_by_default() {
    let config = resolve_ok(json!({ "docker": true }));
    assert_eq!(config["releaseTagPatternRequireSemver"], false);
    assert_eq!(config["groups"]["__default__"]["releaseTagPatternRequireSemver"], false);
}

#[test]
fn test_explicit_semver_requirement_wins_over_docker() {
    let config = resolve_ok(json!({
        "docker": true,
        "groups": {
            "libs": { "projects": "lib-*", "releaseTagPatternRequireSemver": true },
            "core": { "projects": ["nx"] }
        }
    }));
    assert_eq!(config["groups"]["libs"]["releaseTagPatternRequireSemver"], true);
    assert_eq!(config["groups"]["core"]["releaseTagPatternRequireSemver"], false);

    let config = resolve_ok(json!({
        "groups": {
            "libs": { "projects": "lib-*", "releaseTagPatternRequireSemver": false },
            "core": { "projects": ["nx"] }
        }
    }));
    assert_eq!(config["groups"]["libs"]["releaseTagPatternRequireSemver"], false);
    assert_eq!(config["groups"]["core"]["releaseTagPatternRequireSemver"], true);
}

#[test]
fn test_group_docker_without_workspace_docker() {
    let config = resolve_ok(json!({
        "groups": {
            "apps": {
                "projects": ["root"],
                "docker": { "registryUrl": "registry.example.org", "groupPreVersionCommand": "make image" }
            },
            "libs": { "projects": "lib-*" }
        }
    }));

    assert!(config.get("docker").is_none());
    assert_eq!(config["releaseTagPatternRequireSemver"], true);

    let apps = &config["groups"]["apps"];
    assert_eq!(apps["docker"]["registryUrl"], "registry.example.org");
    assert_eq!(apps["docker"]["groupPreVersionCommand"], "make image");
    assert_eq!(apps["releaseTagPatternRequireSemver"], false);
    assert_eq!(apps["version"]["groupPreVersionCommand"], "");
    assert!(config["groups"]["libs"].get("docker").is_none());
}

#[test]
fn test_group_overrides_workspace_docker() {
    let config = resolve_ok(json!({
        "docker": { "repositoryName": "acme/app", "versionSchemes": { "nightly": "{currentDate|YYMMDD}" } },
        "groups": {
            "libs": { "projects": "lib-*", "docker": false },
            "core": { "projects": ["nx"], "docker": { "skipVersionActions": true } }
        }
    }));

    assert_eq!(config["docker"]["repositoryName"], "acme/app");
    assert_eq!(config["docker"]["versionSchemes"]["nightly"], "{currentDate|YYMMDD}");
    assert_eq!(config["docker"]["versionSchemes"].as_object().unwrap().len(), 3);

    assert!(config["groups"]["libs"].get("docker").is_none());
    assert_eq!(config["groups"]["libs"]["releaseTagPatternRequireSemver"], true);

    let core = &config["groups"]["core"]["docker"];
    assert_eq!(core["repositoryName"], "acme/app");
    assert_eq!(core["skipVersionActions"], true);
    assert!(core.get("preVersionCommand").is_none());
}

#[test]
fn test_docker_false_at_workspace() {
    let config = resolve_ok(json!({ "docker": false }));
    assert!(config.get("docker").is_none());
    assert_eq!(config["releaseTagPatternRequireSemver"], true);
}
