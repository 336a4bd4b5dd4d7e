//! Fully resolved release configuration
//!
//! Produced once per resolution and never mutated afterwards. Serializes to
//! the camelCase JSON tree consumed by the release pipeline.

use crate::config::shorthand::Toggle;
use crate::config::user::{
    CheckAllBranchesWhen, GitUserConfig, ProjectsRelationship, SemverBump, SkipVersionActions,
    UpdateDependents, VersionPlans,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitConfig {
    pub commit: bool,
    pub commit_message: String,
    pub commit_args: String,
    pub stage_changes: bool,
    pub tag: bool,
    pub tag_message: String,
    pub tag_args: String,
    pub push: bool,
    pub push_args: String,
}

impl GitConfig {
    /// Overlay the fields the user set explicitly
    pub fn apply(&mut self, input: &GitUserConfig) {
        if let Some(commit) = input.commit {
            self.commit = commit;
        }
        if let Some(ref message) = input.commit_message {
            self.commit_message.clone_from(message);
        }
        if let Some(ref args) = input.commit_args {
            self.commit_args.clone_from(args);
        }
        if let Some(stage_changes) = input.stage_changes {
            self.stage_changes = stage_changes;
        }
        if let Some(tag) = input.tag {
            self.tag = tag;
        }
        if let Some(ref message) = input.tag_message {
            self.tag_message.clone_from(message);
        }
        if let Some(ref args) = input.tag_args {
            self.tag_args.clone_from(args);
        }
        if let Some(push) = input.push {
            self.push = push;
        }
        if let Some(ref args) = input.push_args {
            self.push_args.clone_from(args);
        }
    }
}

/// Version options shared by the workspace and every group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionOptions {
    pub conventional_commits: bool,
    pub use_legacy_versioning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_options: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_actions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_actions_options: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifier_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_resolver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_resolver_metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_current_version_resolver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_roots_to_update: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_semver_bumps_for_zero_major_version: Option<bool>,
    pub log_unchanged_projects: bool,
    pub update_dependents: UpdateDependents,
    pub preserve_local_dependency_protocols: bool,
}

/// Workspace `version` block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConfig {
    #[serde(flatten)]
    pub options: VersionOptions,
    pub pre_version_command: String,
    pub git: GitConfig,
}

/// A release group's `version` block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupVersionConfig {
    #[serde(flatten)]
    pub options: VersionOptions,
    pub group_pre_version_command: String,
}

/// Hosting provider that receives created releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseProvider {
    Github,
    GithubEnterpriseServer,
    Gitlab,
}

impl ReleaseProvider {
    /// Every provider name accepted in a `createRelease` object
    pub const SUPPORTED: [&'static str; 3] = ["github", "github-enterprise-server", "gitlab"];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "github" => Some(Self::Github),
            "github-enterprise-server" => Some(Self::GithubEnterpriseServer),
            "gitlab" => Some(Self::Gitlab),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelease {
    pub provider: ReleaseProvider,
    pub hostname: String,
    pub api_base_url: String,
}

/// Options of one enabled changelog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogOptions {
    pub create_release: Toggle<CreateRelease>,
    pub entry_when_no_changes: Toggle<String>,
    pub file: Toggle<String>,
    pub renderer: String,
    pub render_options: Map<String, Value>,
}

/// Workspace `changelog` block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogConfig {
    pub git: GitConfig,
    pub workspace_changelog: Toggle<ChangelogOptions>,
    pub project_changelogs: Toggle<ChangelogOptions>,
    pub automatic_from_ref: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_version_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_pre_version_command: Option<String>,
    pub version_schemes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_version_actions: Option<SkipVersionActions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitTypeChangelog {
    pub title: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitType {
    pub semver_bump: SemverBump,
    pub changelog: CommitTypeChangelog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConventionalCommitsConfig {
    pub types: BTreeMap<String, CommitType>,
}

/// A fully resolved release group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseGroup {
    pub projects: Vec<String>,
    pub projects_relationship: ProjectsRelationship,
    pub version: GroupVersionConfig,
    pub changelog: Toggle<ChangelogOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerConfig>,
    pub release_tag_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_check_all_branches_when: Option<CheckAllBranchesWhen>,
    pub release_tag_pattern_require_semver: bool,
    pub release_tag_pattern_strict_preid: bool,
    pub version_plans: VersionPlans,
}

/// The resolved workspace release configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub projects_relationship: ProjectsRelationship,
    pub release_tag_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_check_all_branches_when: Option<CheckAllBranchesWhen>,
    pub release_tag_pattern_require_semver: bool,
    pub release_tag_pattern_strict_preid: bool,
    pub git: GitConfig,
    pub version: VersionConfig,
    pub changelog: ChangelogConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerConfig>,
    pub conventional_commits: ConventionalCommitsConfig,
    pub version_plans: VersionPlans,
    pub groups: IndexMap<String, ReleaseGroup>,
}
