//! Built-in defaults for every release configuration domain

use crate::config::resolved::{
    ChangelogOptions, CommitType, CommitTypeChangelog, ConventionalCommitsConfig, DockerConfig,
    GitConfig, VersionOptions,
};
use crate::config::shorthand::Toggle;
use crate::config::user::{SemverBump, UpdateDependents};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Name of the group synthesized when the user defines no groups
pub const IMPLICIT_DEFAULT_RELEASE_GROUP: &str = "__default__";

pub const DEFAULT_FIXED_RELEASE_TAG_PATTERN: &str = "v{version}";
pub const DEFAULT_INDEPENDENT_RELEASE_TAG_PATTERN: &str = "{projectName}@{version}";
pub const VERSION_PLACEHOLDER: &str = "{version}";
pub const PROJECT_NAME_PLACEHOLDER: &str = "{projectName}";

pub const DEFAULT_COMMIT_MESSAGE: &str = "chore(release): publish {version}";

pub const DEFAULT_VERSION_GENERATOR: &str = "@nx/js:release-version";
pub const DEFAULT_VERSION_ACTIONS: &str = "@nx/js/src/release/version-actions";

pub const DEFAULT_CHANGELOG_RENDERER: &str = "nx/release/changelog-renderer";
pub const WORKSPACE_CHANGELOG_FILE: &str = "{workspaceRoot}/CHANGELOG.md";
pub const PROJECT_CHANGELOG_FILE: &str = "{projectRoot}/CHANGELOG.md";
pub const WORKSPACE_ENTRY_WHEN_NO_CHANGES: &str =
    "This was a version bump only, there were no code changes.";
pub const PROJECT_ENTRY_WHEN_NO_CHANGES: &str = "This was a version bump only for {projectName} to align it with other projects, there were no code changes.";

pub const DEFAULT_DOCKER_PRE_VERSION_COMMAND: &str = "npx nx run-many -t docker:build";
pub const DOCKER_PRODUCTION_VERSION_SCHEME: &str = "{currentDate|YYMM.DD}.{shortCommitSha}";
pub const DOCKER_HOTFIX_VERSION_SCHEME: &str = "{currentDate|YYMM.DD}.{shortCommitSha}-hotfix";

pub const GITHUB_HOSTNAME: &str = "github.com";
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITLAB_HOSTNAME: &str = "gitlab.com";

pub const SPECIFIER_SOURCE_CONVENTIONAL_COMMITS: &str = "conventional-commits";
pub const SPECIFIER_SOURCE_VERSION_PLANS: &str = "version-plans";
pub const CURRENT_VERSION_RESOLVER_GIT_TAG: &str = "git-tag";

/// Base git options every phase starts from
#[must_use]
pub fn git_defaults() -> GitConfig {
    GitConfig {
        commit: false,
        commit_message: DEFAULT_COMMIT_MESSAGE.to_owned(),
        commit_args: String::new(),
        stage_changes: false,
        tag: false,
        tag_message: String::new(),
        tag_args: String::new(),
        push: false,
        push_args: String::new(),
    }
}

/// Git defaults for the version phase
#[must_use]
pub fn version_git_defaults() -> GitConfig {
    GitConfig {
        stage_changes: true,
        ..git_defaults()
    }
}

/// Git defaults for the changelog phase
#[must_use]
pub fn changelog_git_defaults() -> GitConfig {
    GitConfig {
        commit: true,
        tag: true,
        ..git_defaults()
    }
}

/// Version options before any user input is applied
#[must_use]
pub fn version_options_defaults(use_legacy_versioning: bool) -> VersionOptions {
    let (generator, generator_options, version_actions, version_actions_options) =
        if use_legacy_versioning {
            (
                Some(DEFAULT_VERSION_GENERATOR.to_owned()),
                Some(Map::new()),
                None,
                None,
            )
        } else {
            (
                None,
                None,
                Some(DEFAULT_VERSION_ACTIONS.to_owned()),
                Some(Map::new()),
            )
        };

    VersionOptions {
        conventional_commits: false,
        use_legacy_versioning,
        generator,
        generator_options,
        version_actions,
        version_actions_options,
        specifier_source: None,
        current_version_resolver: None,
        current_version_resolver_metadata: None,
        fallback_current_version_resolver: None,
        version_prefix: None,
        preid: None,
        manifest_roots_to_update: None,
        adjust_semver_bumps_for_zero_major_version: None,
        log_unchanged_projects: true,
        update_dependents: UpdateDependents::Auto,
        preserve_local_dependency_protocols: true,
    }
}

fn render_options_defaults() -> Map<String, Value> {
    ["authors", "applyUsernameToAuthors", "commitReferences", "versionTitleDate"]
        .into_iter()
        .map(|key| (key.to_owned(), Value::Bool(true)))
        .collect()
}

fn changelog_defaults(file: &str, entry_when_no_changes: &str) -> ChangelogOptions {
    ChangelogOptions {
        create_release: Toggle::Disabled,
        entry_when_no_changes: Toggle::Enabled(entry_when_no_changes.to_owned()),
        file: Toggle::Enabled(file.to_owned()),
        renderer: DEFAULT_CHANGELOG_RENDERER.to_owned(),
        render_options: render_options_defaults(),
    }
}

/// Defaults for the single workspace-wide changelog
#[must_use]
pub fn workspace_changelog_defaults() -> ChangelogOptions {
    changelog_defaults(WORKSPACE_CHANGELOG_FILE, WORKSPACE_ENTRY_WHEN_NO_CHANGES)
}

/// Defaults for per-project changelogs
#[must_use]
pub fn project_changelog_defaults() -> ChangelogOptions {
    changelog_defaults(PROJECT_CHANGELOG_FILE, PROJECT_ENTRY_WHEN_NO_CHANGES)
}

/// Expansion of `docker: true`
#[must_use]
pub fn docker_defaults() -> DockerConfig {
    let mut version_schemes = IndexMap::new();
    version_schemes.insert(
        "production".to_owned(),
        DOCKER_PRODUCTION_VERSION_SCHEME.to_owned(),
    );
    version_schemes.insert("hotfix".to_owned(), DOCKER_HOTFIX_VERSION_SCHEME.to_owned());

    DockerConfig {
        pre_version_command: None,
        group_pre_version_command: Some(String::new()),
        version_schemes,
        registry_url: None,
        repository_name: None,
        skip_version_actions: None,
    }
}

fn commit_type(semver_bump: SemverBump, title: &str, hidden: bool) -> CommitType {
    CommitType {
        semver_bump,
        changelog: CommitTypeChangelog {
            title: title.to_owned(),
            hidden,
        },
    }
}

/// Built-in conventional commit types
#[must_use]
pub fn conventional_commits_defaults() -> ConventionalCommitsConfig {
    let types: BTreeMap<String, CommitType> = [
        (
            "__INVALID__",
            commit_type(
                SemverBump::None,
                "Invalid based on conventional commits specification",
                true,
            ),
        ),
        ("build", commit_type(SemverBump::None, "📦 Build", true)),
        ("chore", commit_type(SemverBump::None, "🏡 Chore", true)),
        ("ci", commit_type(SemverBump::None, "🤖 CI", true)),
        ("docs", commit_type(SemverBump::None, "📖 Documentation", true)),
        ("examples", commit_type(SemverBump::None, "🏀 Examples", true)),
        ("feat", commit_type(SemverBump::Minor, "🚀 Features", false)),
        ("fix", commit_type(SemverBump::Patch, "🩹 Fixes", false)),
        ("perf", commit_type(SemverBump::None, "🔥 Performance", false)),
        ("refactor", commit_type(SemverBump::None, "💅 Refactors", true)),
        ("revert", commit_type(SemverBump::None, "⏪ Revert", true)),
        ("style", commit_type(SemverBump::None, "🎨 Styles", true)),
        ("test", commit_type(SemverBump::None, "✅ Tests", true)),
        ("types", commit_type(SemverBump::None, "🌊 Types", true)),
    ]
    .into_iter()
    .map(|(name, commit_type)| (name.to_owned(), commit_type))
    .collect();

    ConventionalCommitsConfig { types }
}

/// Default for a commit type the built-in table does not know
#[must_use]
pub fn custom_commit_type(name: &str) -> CommitType {
    commit_type(SemverBump::Patch, name, false)
}
