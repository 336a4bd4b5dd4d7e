//! Release configuration resolution
//!
//! Turns the project graph, the file map and a sparse user configuration
//! into a fully resolved [`ReleaseConfig`]. Resolution stops at the first
//! rejected rule; see [`validate`] for the checks that run on the raw
//! input before anything is merged.
//!
//! Every domain is layered the same way: built-in defaults, then the
//! workspace value, then the group value on top of the workspace result.

pub mod changelog;
pub mod conventional_commits;
pub mod docker;
pub mod git;
pub mod groups;
pub mod projects;
pub mod tag_pattern;
pub mod validate;
pub mod version;

use crate::config::resolved::{
    ChangelogOptions, DockerConfig, ReleaseConfig, ReleaseGroup, VersionOptions,
};
use crate::config::shorthand::Toggle;
use crate::config::user::{ProjectsRelationship, ReleaseUserConfig, VersionPlans};
use crate::error::ConfigError;
use crate::system::System;
use crate::workspace::{ProjectFileMap, ProjectGraph};
use groups::GroupMembership;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Result of one resolution, in the shape reported to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutcome {
    pub error: Option<ConfigError>,
    pub nx_release_config: Option<ReleaseConfig>,
}

impl From<Result<ReleaseConfig, ConfigError>> for ResolveOutcome {
    fn from(result: Result<ReleaseConfig, ConfigError>) -> Self {
        match result {
            Ok(config) => Self {
                error: None,
                nx_release_config: Some(config),
            },
            Err(error) => Self {
                error: Some(error),
                nx_release_config: None,
            },
        }
    }
}

/// Resolve the release configuration for a workspace.
///
/// `system` is used only to read project manifests below `workspace_root`.
pub fn resolve_release_config(
    graph: &ProjectGraph,
    file_map: &ProjectFileMap,
    user: &ReleaseUserConfig,
    system: &dyn System,
    workspace_root: &Path,
) -> Result<ReleaseConfig, ConfigError> {
    validate::check_projects_and_groups(user)?;
    validate::check_git_granularity(user)?;
    validate::check_conventional_commits_shorthand(user)?;

    let candidates: Vec<String> =
        projects::select_releasable_projects(graph, file_map, system, workspace_root)
            .into_iter()
            .map(|project| project.name)
            .collect();
    debug!("Releasable projects: {candidates:?}");

    let memberships = groups::partition(user, &candidates)?;

    let push_disabled = git::push_explicitly_disabled(user);
    validate::check_push_for_release(validate::workspace_creates_release(user), push_disabled)?;

    let workspace = WorkspaceLayer::resolve(user, &memberships)?;

    let mut resolved_groups = IndexMap::with_capacity(memberships.len());
    for membership in memberships {
        let group = resolve_group(user, &workspace, &membership, push_disabled)?;
        resolved_groups.insert(membership.name, group);
    }

    Ok(ReleaseConfig {
        groups: resolved_groups,
        ..workspace.config
    })
}

/// Workspace-level results that groups inherit from
struct WorkspaceLayer {
    relationship: ProjectsRelationship,
    /// Version options before the version-plans side effect
    version_options: VersionOptions,
    project_changelogs: Toggle<ChangelogOptions>,
    docker: Option<DockerConfig>,
    version_plans: VersionPlans,
    config: ReleaseConfig,
}

impl WorkspaceLayer {
    fn resolve(
        user: &ReleaseUserConfig,
        memberships: &[GroupMembership<'_>],
    ) -> Result<Self, ConfigError> {
        let relationship = user.projects_relationship.unwrap_or_default();
        let git = git::resolve_git(user, validate::any_creates_release(user));

        let workspace_changelog_by_default = match memberships {
            [only] => group_relationship(only, relationship) == ProjectsRelationship::Fixed,
            _ => false,
        };
        let changelog = changelog::resolve_workspace_changelog(
            user.changelog.as_ref(),
            git.changelog,
            workspace_changelog_by_default,
        )?;

        let docker = docker::resolve_workspace_docker(user.docker.as_ref());
        let version_plans = user.version_plans.clone().unwrap_or_default();
        let version_options = version::resolve_workspace_version_options(user.version.as_ref());
        let version = version::resolve_workspace_version(
            &version_options,
            user.version.as_ref(),
            git.version,
            version_plans.is_enabled(),
        );

        let config = ReleaseConfig {
            projects_relationship: relationship,
            release_tag_pattern: tag_pattern::resolve_workspace_tag_pattern(
                user.release_tag_pattern.as_deref(),
                relationship,
            ),
            release_tag_pattern_check_all_branches_when: user
                .release_tag_pattern_check_all_branches_when
                .clone(),
            release_tag_pattern_require_semver: user
                .release_tag_pattern_require_semver
                .unwrap_or(docker.is_none()),
            release_tag_pattern_strict_preid: user.release_tag_pattern_strict_preid.unwrap_or(false),
            git: git.workspace,
            version,
            changelog,
            docker: docker.clone(),
            conventional_commits: conventional_commits::resolve_conventional_commits(
                user.conventional_commits.as_ref(),
            ),
            version_plans: version_plans.clone(),
            groups: IndexMap::new(),
        };

        Ok(Self {
            relationship,
            version_options,
            project_changelogs: config.changelog.project_changelogs.clone(),
            docker,
            version_plans,
            config,
        })
    }
}

fn group_relationship(
    membership: &GroupMembership<'_>,
    workspace: ProjectsRelationship,
) -> ProjectsRelationship {
    membership
        .user
        .and_then(|group| group.projects_relationship)
        .unwrap_or(workspace)
}

fn resolve_group(
    user: &ReleaseUserConfig,
    workspace: &WorkspaceLayer,
    membership: &GroupMembership<'_>,
    push_disabled: bool,
) -> Result<ReleaseGroup, ConfigError> {
    let name = membership.name.as_str();
    let group = membership.user.cloned().unwrap_or_default();
    let relationship = group_relationship(membership, workspace.relationship);

    validate::check_push_for_release(validate::group_creates_release(&group), push_disabled)?;
    let changelog =
        changelog::resolve_group_changelog(&workspace.project_changelogs, group.changelog.as_ref())?;

    let release_tag_pattern = tag_pattern::resolve_group_tag_pattern(
        group.release_tag_pattern.as_deref(),
        relationship,
        user.release_tag_pattern.as_deref(),
        &workspace.config.release_tag_pattern,
    );
    tag_pattern::validate_tag_pattern(name, &release_tag_pattern)?;

    let docker = docker::resolve_group_docker(name, workspace.docker.as_ref(), group.docker.as_ref());
    let version_plans = group
        .version_plans
        .unwrap_or_else(|| workspace.version_plans.clone());
    let version = version::resolve_group_version(
        name,
        &workspace.version_options,
        group.version.as_ref(),
        workspace.version_plans.is_enabled(),
        version_plans.is_enabled(),
    );

    Ok(ReleaseGroup {
        projects: membership.projects.clone(),
        projects_relationship: relationship,
        version,
        changelog,
        release_tag_pattern,
        release_tag_pattern_check_all_branches_when: group
            .release_tag_pattern_check_all_branches_when
            .or_else(|| user.release_tag_pattern_check_all_branches_when.clone()),
        release_tag_pattern_require_semver: group
            .release_tag_pattern_require_semver
            .or(user.release_tag_pattern_require_semver)
            .unwrap_or(docker.is_none()),
        release_tag_pattern_strict_preid: group
            .release_tag_pattern_strict_preid
            .or(user.release_tag_pattern_strict_preid)
            .unwrap_or(false),
        docker,
        version_plans,
    })
}
