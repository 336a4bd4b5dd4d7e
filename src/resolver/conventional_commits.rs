//! Conventional commit type table

use crate::config::defaults::{conventional_commits_defaults, custom_commit_type};
use crate::config::merge::assign;
use crate::config::resolved::{CommitType, ConventionalCommitsConfig};
use crate::config::shorthand::Shorthand;
use crate::config::user::{CommitTypeInput, ConventionalCommitsUserConfig, SemverBump};

/// Overlay user commit type overrides on the built-in table
#[must_use]
pub fn resolve_conventional_commits(
    input: Option<&ConventionalCommitsUserConfig>,
) -> ConventionalCommitsConfig {
    let mut config = conventional_commits_defaults();
    let Some(types) = input.and_then(|c| c.types.as_ref()) else {
        return config;
    };

    for (name, override_) in types {
        let entry = config
            .types
            .entry(name.clone())
            .or_insert_with(|| custom_commit_type(name));
        apply_commit_type(entry, override_);
    }
    config
}

fn apply_commit_type(commit_type: &mut CommitType, input: &Shorthand<CommitTypeInput>) {
    match *input {
        Shorthand::Flag(false) => {
            commit_type.semver_bump = SemverBump::None;
            commit_type.changelog.hidden = true;
        }
        Shorthand::Flag(true) => {
            commit_type.semver_bump = SemverBump::Patch;
            commit_type.changelog.hidden = false;
        }
        Shorthand::Options(ref options) => {
            assign(&mut commit_type.semver_bump, options.semver_bump.as_ref());
            match options.changelog {
                None => {}
                Some(Shorthand::Flag(enabled)) => commit_type.changelog.hidden = !enabled,
                Some(Shorthand::Options(ref changelog)) => {
                    assign(&mut commit_type.changelog.title, changelog.title.as_ref());
                    assign(&mut commit_type.changelog.hidden, changelog.hidden.as_ref());
                }
            }
        }
    }
}
