//! Cross-field checks that run on the raw user configuration

use crate::config::user::{ReleaseGroupUserConfig, ReleaseUserConfig, creates_release};
use crate::error::ConfigError;

/// `projects` and a non-empty `groups` map are mutually exclusive
pub fn check_projects_and_groups(user: &ReleaseUserConfig) -> Result<(), ConfigError> {
    if user.projects.is_some() && user.user_groups().is_some() {
        return Err(ConfigError::ProjectsAndGroupsDefined);
    }
    Ok(())
}

/// The top-level `git` block cannot be combined with granular git blocks.
///
/// A group's `version.git` counts as granular too.
pub fn check_git_granularity(user: &ReleaseUserConfig) -> Result<(), ConfigError> {
    if user.git.is_none() {
        return Ok(());
    }

    let workspace_granular = user.version.as_ref().is_some_and(|v| v.git.is_some())
        || user.changelog.as_ref().is_some_and(|c| c.git.is_some());
    let group_granular = user.user_groups().is_some_and(|groups| {
        groups
            .values()
            .any(|group| group.version.as_ref().is_some_and(|v| v.git.is_some()))
    });

    if workspace_granular || group_granular {
        return Err(ConfigError::GlobalGitConfigMixedWithGranularGitConfig);
    }
    Ok(())
}

/// `version.conventionalCommits: true` cannot be combined with explicit
/// `specifierSource` or `currentVersionResolver` at the same level
pub fn check_conventional_commits_shorthand(user: &ReleaseUserConfig) -> Result<(), ConfigError> {
    let workspace = user.version.iter();
    let groups = user
        .user_groups()
        .into_iter()
        .flat_map(|groups| groups.values())
        .filter_map(|group| group.version.as_ref());

    for version in workspace.chain(groups) {
        if version.conventional_commits == Some(true) && version.sets_conventional_commits_options() {
            return Err(ConfigError::ConventionalCommitsShorthandMixedWithOverlappingOptions);
        }
    }
    Ok(())
}

/// Whether the workspace changelogs enable `createRelease`
#[must_use]
pub fn workspace_creates_release(user: &ReleaseUserConfig) -> bool {
    user.changelog.as_ref().is_some_and(|changelog| {
        creates_release(changelog.workspace_changelog.as_ref())
            || creates_release(changelog.project_changelogs.as_ref())
    })
}

/// Whether a group's own changelog enables `createRelease`
#[must_use]
pub fn group_creates_release(group: &ReleaseGroupUserConfig) -> bool {
    creates_release(group.changelog.as_ref())
}

/// Whether any changelog in the configuration enables `createRelease`
#[must_use]
pub fn any_creates_release(user: &ReleaseUserConfig) -> bool {
    workspace_creates_release(user)
        || user
            .user_groups()
            .is_some_and(|groups| groups.values().any(group_creates_release))
}

/// Releases cannot be created when pushing is explicitly turned off
pub fn check_push_for_release(
    creates_release: bool,
    push_disabled: bool,
) -> Result<(), ConfigError> {
    if creates_release && push_disabled {
        return Err(ConfigError::GitPushFalseWithCreateRelease);
    }
    Ok(())
}
