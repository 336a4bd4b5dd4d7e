//! Custom error types with exit codes

use serde::Serialize;
use serde::ser::{SerializeStruct as _, Serializer};
use serde_json::{Value, json};
use thiserror::Error;

/// Main error type for the release-config binary
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReleaseError {
    /// Configuration Error - the release configuration was rejected
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input Error - project graph, file map or config could not be parsed
    #[error("Input error: {message}")]
    Input { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl ReleaseError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Input { .. } => 2,
            Self::Filesystem { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an input error
    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

/// A rejected release configuration.
///
/// Exactly one of these is produced per resolution attempt. Each variant maps
/// to a stable `code` and carries the `data` payload reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("\"projects\" and \"groups\" cannot both be defined in the release config")]
    ProjectsAndGroupsDefined,

    #[error("Release group \"{release_group_name}\" does not match any releasable projects")]
    ReleaseGroupMatchesNoProjects { release_group_name: String },

    #[error("Project \"{project}\" matches more than one release group")]
    ProjectMatchesMultipleGroups { project: String },

    #[error(
        "Release group \"{release_group_name}\" has a releaseTagPattern that does not contain exactly one \"{{version}}\" placeholder"
    )]
    ReleaseGroupReleaseTagPatternVersionPlaceholderMissingOrExcessive { release_group_name: String },

    #[error(
        "The top level \"git\" config cannot be combined with \"version.git\" or \"changelog.git\""
    )]
    GlobalGitConfigMixedWithGranularGitConfig,

    #[error(
        "\"version.conventionalCommits\" cannot be combined with an explicit \"currentVersionResolver\" or \"specifierSource\""
    )]
    ConventionalCommitsShorthandMixedWithOverlappingOptions,

    #[error("Invalid createRelease provider \"{value}\", expected one of: {}", .valid_providers.join(", "))]
    InvalidChangelogCreateReleaseProvider {
        value: String,
        valid_providers: Vec<String>,
    },

    #[error("Invalid createRelease hostname \"{hostname}\"")]
    InvalidChangelogCreateReleaseHostname { hostname: String },

    #[error("Invalid createRelease apiBaseUrl \"{api_base_url}\"")]
    InvalidChangelogCreateReleaseApiBaseUrl { api_base_url: String },

    #[error("\"createRelease\" requires pushing, but \"git.push\" is explicitly false")]
    GitPushFalseWithCreateRelease,
}

impl ConfigError {
    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match *self {
            Self::ProjectsAndGroupsDefined => "PROJECTS_AND_GROUPS_DEFINED",
            Self::ReleaseGroupMatchesNoProjects { .. } => "RELEASE_GROUP_MATCHES_NO_PROJECTS",
            Self::ProjectMatchesMultipleGroups { .. } => "PROJECT_MATCHES_MULTIPLE_GROUPS",
            Self::ReleaseGroupReleaseTagPatternVersionPlaceholderMissingOrExcessive { .. } => {
                "RELEASE_GROUP_RELEASE_TAG_PATTERN_VERSION_PLACEHOLDER_MISSING_OR_EXCESSIVE"
            }
            Self::GlobalGitConfigMixedWithGranularGitConfig => {
                "GLOBAL_GIT_CONFIG_MIXED_WITH_GRANULAR_GIT_CONFIG"
            }
            Self::ConventionalCommitsShorthandMixedWithOverlappingOptions => {
                "CONVENTIONAL_COMMITS_SHORTHAND_MIXED_WITH_OVERLAPPING_OPTIONS"
            }
            Self::InvalidChangelogCreateReleaseProvider { .. } => {
                "INVALID_CHANGELOG_CREATE_RELEASE_PROVIDER"
            }
            Self::InvalidChangelogCreateReleaseHostname { .. } => {
                "INVALID_CHANGELOG_CREATE_RELEASE_HOSTNAME"
            }
            Self::InvalidChangelogCreateReleaseApiBaseUrl { .. } => {
                "INVALID_CHANGELOG_CREATE_RELEASE_API_BASE_URL"
            }
            Self::GitPushFalseWithCreateRelease => "GIT_PUSH_FALSE_WITH_CREATE_RELEASE",
        }
    }

    /// Structured payload describing the offending value
    #[must_use]
    pub fn data(&self) -> Value {
        match self {
            Self::ReleaseGroupMatchesNoProjects { release_group_name }
            | Self::ReleaseGroupReleaseTagPatternVersionPlaceholderMissingOrExcessive {
                release_group_name,
            } => json!({ "releaseGroupName": release_group_name }),
            Self::ProjectMatchesMultipleGroups { project } => json!({ "project": project }),
            Self::InvalidChangelogCreateReleaseProvider {
                value,
                valid_providers,
            } => json!({ "value": value, "validProviders": valid_providers }),
            Self::InvalidChangelogCreateReleaseHostname { hostname } => {
                json!({ "hostname": hostname })
            }
            Self::InvalidChangelogCreateReleaseApiBaseUrl { api_base_url } => {
                json!({ "apiBaseUrl": api_base_url })
            }
            Self::ProjectsAndGroupsDefined
            | Self::GlobalGitConfigMixedWithGranularGitConfig
            | Self::ConventionalCommitsShorthandMixedWithOverlappingOptions
            | Self::GitPushFalseWithCreateRelease => json!({}),
        }
    }
}

impl Serialize for ConfigError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConfigError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("data", &self.data())?;
        state.end()
    }
}
