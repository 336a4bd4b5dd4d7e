//! Release tag patterns

use crate::config::defaults::{
    DEFAULT_FIXED_RELEASE_TAG_PATTERN, DEFAULT_INDEPENDENT_RELEASE_TAG_PATTERN,
    PROJECT_NAME_PLACEHOLDER, VERSION_PLACEHOLDER,
};
use crate::config::user::ProjectsRelationship;
use crate::error::ConfigError;

/// Workspace tag pattern: the user value, else the relationship default
#[must_use]
pub fn resolve_workspace_tag_pattern(
    user_pattern: Option<&str>,
    relationship: ProjectsRelationship,
) -> String {
    user_pattern
        .map_or_else(|| default_tag_pattern(relationship).to_owned(), str::to_owned)
}

/// Group tag pattern.
///
/// An independent group without its own pattern gets one that names the
/// project, unless the workspace pattern the user wrote already does.
#[must_use]
pub fn resolve_group_tag_pattern(
    group_pattern: Option<&str>,
    relationship: ProjectsRelationship,
    workspace_user_pattern: Option<&str>,
    workspace_resolved_pattern: &str,
) -> String {
    if let Some(pattern) = group_pattern {
        return pattern.to_owned();
    }

    match relationship {
        ProjectsRelationship::Independent => workspace_user_pattern
            .filter(|pattern| pattern.contains(PROJECT_NAME_PLACEHOLDER))
            .unwrap_or(DEFAULT_INDEPENDENT_RELEASE_TAG_PATTERN)
            .to_owned(),
        ProjectsRelationship::Fixed => workspace_resolved_pattern.to_owned(),
    }
}

const fn default_tag_pattern(relationship: ProjectsRelationship) -> &'static str {
    match relationship {
        ProjectsRelationship::Fixed => DEFAULT_FIXED_RELEASE_TAG_PATTERN,
        ProjectsRelationship::Independent => DEFAULT_INDEPENDENT_RELEASE_TAG_PATTERN,
    }
}

/// A tag pattern must contain `{version}` exactly once
pub fn validate_tag_pattern(group_name: &str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.matches(VERSION_PLACEHOLDER).count() == 1 {
        return Ok(());
    }
    Err(
        ConfigError::ReleaseGroupReleaseTagPatternVersionPlaceholderMissingOrExcessive {
            release_group_name: group_name.to_owned(),
        },
    )
}
