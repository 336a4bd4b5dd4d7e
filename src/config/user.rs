//! Raw, sparse release configuration as written by the user
//!
//! Every field is optional. Shorthand-capable fields use [`Shorthand`] and
//! are normalised by the resolver before any merging happens.

use crate::config::shorthand::Shorthand;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How the projects of a release group are versioned together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectsRelationship {
    /// All members share one version and one tag
    #[default]
    Fixed,
    /// Each member is versioned and tagged on its own
    Independent,
}

/// A single project pattern or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectsInput {
    One(String),
    Many(Vec<String>),
}

impl ProjectsInput {
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match *self {
            Self::One(ref pattern) => vec![pattern.as_str()],
            Self::Many(ref patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }
}

/// Whether tag lookups should consider every branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckAllBranchesWhen {
    Flag(bool),
    Branches(Vec<String>),
}

/// `versionPlans: true` or an options object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionPlans {
    Flag(bool),
    Options(VersionPlansOptions),
}

impl VersionPlans {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match *self {
            Self::Flag(flag) => flag,
            Self::Options(_) => true,
        }
    }
}

impl Default for VersionPlans {
    fn default() -> Self {
        Self::Flag(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionPlansOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_patterns_for_plan_check: Option<Vec<String>>,
}

/// Whether dependents of a bumped project are bumped too
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateDependents {
    #[default]
    Auto,
    Always,
    Never,
}

/// Raw git options, shared by `git`, `version.git` and `changelog.git`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_changes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_args: Option<String>,
}

/// Raw `version` block, used at workspace and group level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventional_commits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_legacy_versioning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator_options: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_actions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_actions_options: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifier_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version_resolver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version_resolver_metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_current_version_resolver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_roots_to_update: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjust_semver_bumps_for_zero_major_version: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_unchanged_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_dependents: Option<UpdateDependents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_local_dependency_protocols: Option<bool>,
    /// Workspace only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_version_command: Option<String>,
    /// Group only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_pre_version_command: Option<String>,
    /// Workspace only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitUserConfig>,
}

impl VersionUserConfig {
    /// Whether `specifierSource` or `currentVersionResolver` is set directly,
    /// either at the top of the block or inside `generatorOptions`
    #[must_use]
    pub fn sets_conventional_commits_options(&self) -> bool {
        let in_generator_options = self.generator_options.as_ref().is_some_and(|options| {
            options.contains_key("specifierSource") || options.contains_key("currentVersionResolver")
        });
        self.specifier_source.is_some() || self.current_version_resolver.is_some() || in_generator_options
    }

    /// Whether `specifierSource` is set directly, at the top of the block or
    /// inside `generatorOptions`
    #[must_use]
    pub fn sets_specifier_source(&self) -> bool {
        self.specifier_source.is_some()
            || self
                .generator_options
                .as_ref()
                .is_some_and(|options| options.contains_key("specifierSource"))
    }
}

/// Raw `createRelease` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateReleaseInput {
    Flag(bool),
    Provider(String),
    Custom(CreateReleaseOptionsInput),
}

impl CreateReleaseInput {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(*self, Self::Flag(false))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReleaseOptionsInput {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

/// Raw options for a workspace, project or group changelog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogOptionsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_release: Option<CreateReleaseInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_when_no_changes: Option<Shorthand<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Shorthand<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_options: Option<Map<String, Value>>,
}

/// Whether a shorthand changelog value enables `createRelease`
#[must_use]
pub fn creates_release(changelog: Option<&Shorthand<ChangelogOptionsInput>>) -> bool {
    changelog
        .and_then(Shorthand::options)
        .and_then(|options| options.create_release.as_ref())
        .is_some_and(CreateReleaseInput::is_enabled)
}

/// Raw workspace `changelog` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_changelog: Option<Shorthand<ChangelogOptionsInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_changelogs: Option<Shorthand<ChangelogOptionsInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_from_ref: Option<bool>,
}

/// `skipVersionActions` for docker releases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipVersionActions {
    Flag(bool),
    Projects(Vec<String>),
}

/// Raw docker options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerUserConfig {
    /// Workspace only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_version_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_pre_version_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_schemes: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_version_actions: Option<SkipVersionActions>,
}

/// Semver bump triggered by a commit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverBump {
    Major,
    Minor,
    Patch,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitTypeChangelogInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitTypeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semver_bump: Option<SemverBump>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<Shorthand<CommitTypeChangelogInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConventionalCommitsUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<IndexMap<String, Shorthand<CommitTypeInput>>>,
}

/// Raw release group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseGroupUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectsInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_relationship: Option<ProjectsRelationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<Shorthand<ChangelogOptionsInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<Shorthand<DockerUserConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_check_all_branches_when: Option<CheckAllBranchesWhen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_require_semver: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_strict_preid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_plans: Option<VersionPlans>,
}

/// Raw workspace release configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseUserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectsInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<IndexMap<String, ReleaseGroupUserConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_relationship: Option<ProjectsRelationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_check_all_branches_when: Option<CheckAllBranchesWhen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_require_semver: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_tag_pattern_strict_preid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<ChangelogUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<Shorthand<DockerUserConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventional_commits: Option<ConventionalCommitsUserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_plans: Option<VersionPlans>,
}

impl ReleaseUserConfig {
    /// User-defined groups, treating an empty map as absent
    #[must_use]
    pub fn user_groups(&self) -> Option<&IndexMap<String, ReleaseGroupUserConfig>> {
        self.groups.as_ref().filter(|groups| !groups.is_empty())
    }
}
