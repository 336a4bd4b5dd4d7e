//! Changelog options and `createRelease` providers

use crate::config::defaults::{
    GITHUB_API_BASE_URL, GITHUB_HOSTNAME, GITLAB_HOSTNAME, project_changelog_defaults,
    workspace_changelog_defaults,
};
use crate::config::merge::{assign, deep_merge};
use crate::config::resolved::{
    ChangelogConfig, ChangelogOptions, CreateRelease, GitConfig, ReleaseProvider,
};
use crate::config::shorthand::{Shorthand, Toggle, resolve_toggle};
use crate::config::user::{
    ChangelogOptionsInput, ChangelogUserConfig, CreateReleaseInput, CreateReleaseOptionsInput,
};
use crate::error::ConfigError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// RFC 1123 hostname labels separated by dots
static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("hostname pattern is a valid regex")
});

/// Resolve the workspace `changelog` block.
///
/// `workspace_changelog_by_default` is false when the group layout makes a
/// single workspace changelog ambiguous; an explicit user value still wins.
pub fn resolve_workspace_changelog(
    input: Option<&ChangelogUserConfig>,
    git: GitConfig,
    workspace_changelog_by_default: bool,
) -> Result<ChangelogConfig, ConfigError> {
    let workspace_defaults = workspace_changelog_defaults();
    let baseline = if workspace_changelog_by_default {
        Toggle::Enabled(workspace_defaults.clone())
    } else {
        Toggle::Disabled
    };
    let workspace_changelog = resolve_changelog_options(
        &baseline,
        &workspace_defaults,
        input.and_then(|c| c.workspace_changelog.as_ref()),
    )?;

    let project_changelogs = resolve_changelog_options(
        &Toggle::Disabled,
        &project_changelog_defaults(),
        input.and_then(|c| c.project_changelogs.as_ref()),
    )?;

    Ok(ChangelogConfig {
        git,
        workspace_changelog,
        project_changelogs,
        automatic_from_ref: input.and_then(|c| c.automatic_from_ref).unwrap_or(false),
    })
}

/// Resolve a group's changelog on top of the workspace project changelogs
pub fn resolve_group_changelog(
    workspace_project_changelogs: &Toggle<ChangelogOptions>,
    input: Option<&Shorthand<ChangelogOptionsInput>>,
) -> Result<Toggle<ChangelogOptions>, ConfigError> {
    resolve_changelog_options(
        workspace_project_changelogs,
        &project_changelog_defaults(),
        input,
    )
}

fn resolve_changelog_options(
    baseline: &Toggle<ChangelogOptions>,
    defaults: &ChangelogOptions,
    input: Option<&Shorthand<ChangelogOptionsInput>>,
) -> Result<Toggle<ChangelogOptions>, ConfigError> {
    resolve_toggle(baseline, defaults, input, |options, input| {
        apply_changelog_options(options, defaults, input)
    })
}

fn apply_changelog_options(
    options: &mut ChangelogOptions,
    defaults: &ChangelogOptions,
    input: &ChangelogOptionsInput,
) -> Result<(), ConfigError> {
    if let Some(ref create_release) = input.create_release {
        options.create_release = resolve_create_release(create_release)?;
    }
    options.entry_when_no_changes = resolve_text(
        &options.entry_when_no_changes,
        &defaults.entry_when_no_changes,
        input.entry_when_no_changes.as_ref(),
    );
    options.file = resolve_text(&options.file, &defaults.file, input.file.as_ref());
    assign(&mut options.renderer, input.renderer.as_ref());
    if let Some(ref render_options) = input.render_options {
        deep_merge(&mut options.render_options, render_options);
    }
    Ok(())
}

fn resolve_text(
    current: &Toggle<String>,
    default: &Toggle<String>,
    input: Option<&Shorthand<String>>,
) -> Toggle<String> {
    let fallback = default.as_enabled().cloned().unwrap_or_default();
    match resolve_toggle(current, &fallback, input, |text, value: &String| {
        text.clone_from(value);
        Ok::<(), std::convert::Infallible>(())
    }) {
        Ok(resolved) => resolved,
        Err(never) => match never {},
    }
}

/// Expand and validate a raw `createRelease` value
pub fn resolve_create_release(
    input: &CreateReleaseInput,
) -> Result<Toggle<CreateRelease>, ConfigError> {
    match *input {
        CreateReleaseInput::Flag(false) => Ok(Toggle::Disabled),
        CreateReleaseInput::Flag(true) => Err(invalid_provider("true")),
        CreateReleaseInput::Provider(ref name) => match name.as_str() {
            "github" => Ok(Toggle::Enabled(CreateRelease {
                provider: ReleaseProvider::Github,
                hostname: GITHUB_HOSTNAME.to_owned(),
                api_base_url: GITHUB_API_BASE_URL.to_owned(),
            })),
            "gitlab" => Ok(Toggle::Enabled(CreateRelease {
                provider: ReleaseProvider::Gitlab,
                hostname: GITLAB_HOSTNAME.to_owned(),
                api_base_url: default_api_base_url(ReleaseProvider::Gitlab, GITLAB_HOSTNAME),
            })),
            other => Err(invalid_provider(other)),
        },
        CreateReleaseInput::Custom(ref options) => resolve_custom_release(options).map(Toggle::Enabled),
    }
}

fn resolve_custom_release(input: &CreateReleaseOptionsInput) -> Result<CreateRelease, ConfigError> {
    let provider =
        ReleaseProvider::from_name(&input.provider).ok_or_else(|| invalid_provider(&input.provider))?;

    let hostname = match (input.hostname.as_deref(), provider) {
        (Some(hostname), _) => hostname.to_owned(),
        (None, ReleaseProvider::Github) => GITHUB_HOSTNAME.to_owned(),
        (None, ReleaseProvider::Gitlab) => GITLAB_HOSTNAME.to_owned(),
        (None, ReleaseProvider::GithubEnterpriseServer) => String::new(),
    };
    if !is_valid_hostname(&hostname) {
        return Err(ConfigError::InvalidChangelogCreateReleaseHostname { hostname });
    }

    let api_base_url = match input.api_base_url {
        Some(ref api_base_url) => {
            if Url::parse(api_base_url).is_err() {
                return Err(ConfigError::InvalidChangelogCreateReleaseApiBaseUrl {
                    api_base_url: api_base_url.clone(),
                });
            }
            api_base_url.clone()
        }
        None => default_api_base_url(provider, &hostname),
    };

    Ok(CreateRelease {
        provider,
        hostname,
        api_base_url,
    })
}

fn default_api_base_url(provider: ReleaseProvider, hostname: &str) -> String {
    match provider {
        ReleaseProvider::Github if hostname == GITHUB_HOSTNAME => GITHUB_API_BASE_URL.to_owned(),
        ReleaseProvider::Github | ReleaseProvider::GithubEnterpriseServer => {
            format!("https://{hostname}/api/v3")
        }
        ReleaseProvider::Gitlab => format!("https://{hostname}/api/v4"),
    }
}

fn is_valid_hostname(hostname: &str) -> bool {
    HOSTNAME_PATTERN.is_match(hostname)
}

fn invalid_provider(value: &str) -> ConfigError {
    ConfigError::InvalidChangelogCreateReleaseProvider {
        value: value.to_owned(),
        valid_providers: ReleaseProvider::SUPPORTED
            .iter()
            .map(|&provider| provider.to_owned())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(provider: &str, hostname: Option<&str>, api_base_url: Option<&str>) -> CreateReleaseInput {
        CreateReleaseInput::Custom(CreateReleaseOptionsInput {
            provider: provider.to_owned(),
            hostname: hostname.map(str::to_owned),
            api_base_url: api_base_url.map(str::to_owned),
        })
    }

    #[test]
    fn test_github_shorthand() {
        let resolved = resolve_create_release(&CreateReleaseInput::Provider("github".into())).unwrap();
        assert_eq!(
            resolved,
            Toggle::Enabled(CreateRelease {
                provider: ReleaseProvider::Github,
                hostname: "github.com".into(),
                api_base_url: "https://api.github.com".into(),
            })
        );
    }

    #[test]
    fn test_gitlab_shorthand_derives_api_url() {
        let resolved = resolve_create_release(&CreateReleaseInput::Provider("gitlab".into())).unwrap();
        let release = resolved.as_enabled().unwrap();
        assert_eq!(release.hostname, "gitlab.com");
        assert_eq!(release.api_base_url, "https://gitlab.com/api/v4");
    }

    #[test]
    fn test_enterprise_server_derives_v3_url() {
        let resolved =
            resolve_create_release(&custom("github-enterprise-server", Some("git.example.org"), None))
                .unwrap();
        assert_eq!(
            resolved.as_enabled().unwrap().api_base_url,
            "https://git.example.org/api/v3"
        );
    }

    #[test]
    fn test_explicit_api_url_is_kept() {
        let resolved = resolve_create_release(&custom(
            "gitlab",
            Some("gitlab.example.org"),
            Some("https://gitlab.example.org/custom/api"),
        ))
        .unwrap();
        assert_eq!(
            resolved.as_enabled().unwrap().api_base_url,
            "https://gitlab.example.org/custom/api"
        );
    }

    #[test]
    fn test_unknown_provider() {
        let err = resolve_create_release(&custom("bitbucket", Some("bitbucket.org"), None)).unwrap_err();
        assert_eq!(err.code(), "INVALID_CHANGELOG_CREATE_RELEASE_PROVIDER");
        assert_eq!(err.data()["value"], "bitbucket");
        assert_eq!(err.data()["validProviders"][1], "github-enterprise-server");
    }

    #[test]
    fn test_bad_hostname_and_url() {
        let err =
            resolve_create_release(&custom("github-enterprise-server", Some("not a host"), None)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidChangelogCreateReleaseHostname {
                hostname: "not a host".into()
            }
        );

        let err = resolve_create_release(&custom(
            "github-enterprise-server",
            Some("git.example.org"),
            Some("not a url"),
        ))
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_CHANGELOG_CREATE_RELEASE_API_BASE_URL");
    }

    #[test]
    fn test_hostname_validation() {
        for hostname in ["github.com", "gitlab.example.org", "localhost", "git-01.corp"] {
            assert!(is_valid_hostname(hostname), "{hostname} should be accepted");
        }
        for hostname in ["", "-github.com", "github..com", "https://github.com", "git_hub.com"] {
            assert!(!is_valid_hostname(hostname), "{hostname} should be rejected");
        }
    }

    #[test]
    fn test_enterprise_server_requires_hostname() {
        let err = resolve_create_release(&custom("github-enterprise-server", None, None)).unwrap_err();
        assert_eq!(err.code(), "INVALID_CHANGELOG_CREATE_RELEASE_HOSTNAME");
    }

    #[test]
    fn test_entry_when_no_changes_true_restores_default() {
        let defaults = project_changelog_defaults();
        let mut disabled = defaults.clone();
        disabled.entry_when_no_changes = Toggle::Disabled;

        let resolved = resolve_text(
            &disabled.entry_when_no_changes,
            &defaults.entry_when_no_changes,
            Some(&Shorthand::Flag(true)),
        );
        assert_eq!(resolved, defaults.entry_when_no_changes);
    }
}
