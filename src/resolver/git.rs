//! Git options for the workspace, the version phase and the changelog phase

use crate::config::defaults::{changelog_git_defaults, git_defaults, version_git_defaults};
use crate::config::resolved::GitConfig;
use crate::config::user::{GitUserConfig, ReleaseUserConfig};

/// The three resolved git blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGit {
    pub workspace: GitConfig,
    pub version: GitConfig,
    pub changelog: GitConfig,
}

/// Resolve git options.
///
/// The top-level `git` block seeds both phases; each phase then applies its
/// own granular block. `push` is forced on for the changelog phase whenever
/// a release will be created.
#[must_use]
pub fn resolve_git(user: &ReleaseUserConfig, create_release_enabled: bool) -> ResolvedGit {
    let global = user.git.as_ref();

    let mut workspace = git_defaults();
    apply_layers(&mut workspace, &[global]);

    let mut version = version_git_defaults();
    let version_git = user.version.as_ref().and_then(|v| v.git.as_ref());
    apply_layers(&mut version, &[global, version_git]);

    let mut changelog = changelog_git_defaults();
    let changelog_git = user.changelog.as_ref().and_then(|c| c.git.as_ref());
    apply_layers(&mut changelog, &[global, changelog_git]);
    if create_release_enabled {
        changelog.push = true;
    }

    ResolvedGit {
        workspace,
        version,
        changelog,
    }
}

fn apply_layers(git: &mut GitConfig, layers: &[Option<&GitUserConfig>]) {
    for layer in layers.iter().flatten() {
        git.apply(layer);
    }
}

/// Whether `push: false` is written in any of the three git blocks
#[must_use]
pub fn push_explicitly_disabled(user: &ReleaseUserConfig) -> bool {
    let disabled = |git: Option<&GitUserConfig>| git.and_then(|g| g.push) == Some(false);

    disabled(user.git.as_ref())
        || disabled(user.version.as_ref().and_then(|v| v.git.as_ref()))
        || disabled(user.changelog.as_ref().and_then(|c| c.git.as_ref()))
}
