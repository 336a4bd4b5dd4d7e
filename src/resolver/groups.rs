//! Partitioning of releasable projects into release groups

use crate::config::defaults::IMPLICIT_DEFAULT_RELEASE_GROUP;
use crate::config::user::{ProjectsInput, ReleaseGroupUserConfig, ReleaseUserConfig};
use crate::error::ConfigError;
use glob::Pattern;
use std::collections::HashSet;
use tracing::debug;

/// A group name, its resolved members, and the user's settings for it
#[derive(Debug, Clone)]
pub struct GroupMembership<'a> {
    pub name: String,
    pub projects: Vec<String>,
    /// `None` for the implicit default group
    pub user: Option<&'a ReleaseGroupUserConfig>,
}

/// Expand project patterns against the candidate names.
///
/// Patterns are shell globs applied in order; a leading `!` removes the
/// names it matches from what has been collected so far. The result keeps
/// candidate order and holds each name once.
#[must_use]
pub fn expand_project_patterns(patterns: &[&str], candidates: &[String]) -> Vec<String> {
    let mut selected: HashSet<&str> = HashSet::new();

    for raw in patterns {
        let (negated, pattern) = raw
            .strip_prefix('!')
            .map_or((false, *raw), |rest| (true, rest));
        let matcher = Pattern::new(pattern).ok();
        let matches = |name: &str| {
            matcher
                .as_ref()
                .map_or(name == pattern, |matcher| matcher.matches(name))
        };

        for candidate in candidates {
            if matches(candidate) {
                if negated {
                    selected.remove(candidate.as_str());
                } else {
                    selected.insert(candidate.as_str());
                }
            }
        }
    }

    candidates
        .iter()
        .filter(|candidate| selected.contains(candidate.as_str()))
        .cloned()
        .collect()
}

/// Resolve every group's membership.
///
/// User groups are checked in declaration order: a group that matches no
/// candidate, or a project already claimed by an earlier group, is an error.
/// Without user groups a single implicit group holds the workspace
/// `projects` selection, or every candidate.
pub fn partition<'a>(
    user: &'a ReleaseUserConfig,
    candidates: &[String],
) -> Result<Vec<GroupMembership<'a>>, ConfigError> {
    let Some(groups) = user.user_groups() else {
        return implicit_group(user.projects.as_ref(), candidates).map(|group| vec![group]);
    };

    let mut claimed: HashSet<String> = HashSet::new();
    let mut memberships = Vec::with_capacity(groups.len());

    for (name, group) in groups {
        let patterns = group
            .projects
            .as_ref()
            .map(ProjectsInput::patterns)
            .unwrap_or_default();
        let projects = expand_project_patterns(&patterns, candidates);
        debug!("Release group \"{name}\" matched {projects:?}");

        if projects.is_empty() {
            return Err(ConfigError::ReleaseGroupMatchesNoProjects {
                release_group_name: name.clone(),
            });
        }

        for project in &projects {
            if !claimed.insert(project.clone()) {
                return Err(ConfigError::ProjectMatchesMultipleGroups {
                    project: project.clone(),
                });
            }
        }

        memberships.push(GroupMembership {
            name: name.clone(),
            projects,
            user: Some(group),
        });
    }

    Ok(memberships)
}

fn implicit_group<'a>(
    projects: Option<&ProjectsInput>,
    candidates: &[String],
) -> Result<GroupMembership<'a>, ConfigError> {
    let projects = match projects {
        Some(input) => {
            let expanded = expand_project_patterns(&input.patterns(), candidates);
            if expanded.is_empty() {
                return Err(ConfigError::ReleaseGroupMatchesNoProjects {
                    release_group_name: IMPLICIT_DEFAULT_RELEASE_GROUP.to_owned(),
                });
            }
            expanded
        }
        None => candidates.to_vec(),
    };

    Ok(GroupMembership {
        name: IMPLICIT_DEFAULT_RELEASE_GROUP.to_owned(),
        projects,
        user: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["lib-a", "lib-b", "nx", "root"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_glob_expansion() {
        assert_eq!(
            expand_project_patterns(&["lib-*"], &candidates()),
            vec!["lib-a", "lib-b"]
        );
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        assert_eq!(
            expand_project_patterns(&["nx", "does-not-exist"], &candidates()),
            vec!["nx"]
        );
    }

    #[test]
    fn test_negated_patterns_remove_matches() {
        assert_eq!(
            expand_project_patterns(&["*", "!lib-*"], &candidates()),
            vec!["nx", "root"]
        );
    }

    #[test]
    fn test_result_keeps_candidate_order_without_duplicates() {
        assert_eq!(
            expand_project_patterns(&["root", "lib-b", "lib-*"], &candidates()),
            vec!["lib-a", "lib-b", "root"]
        );
    }
}
