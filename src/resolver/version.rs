//! Version options for the workspace and for each release group

use crate::config::defaults::{
    CURRENT_VERSION_RESOLVER_GIT_TAG, SPECIFIER_SOURCE_CONVENTIONAL_COMMITS,
    SPECIFIER_SOURCE_VERSION_PLANS, version_options_defaults,
};
use crate::config::merge::{assign, assign_opt, merge_into};
use crate::config::resolved::{GitConfig, GroupVersionConfig, VersionConfig, VersionOptions};
use crate::config::user::VersionUserConfig;
use serde_json::Value;
use tracing::warn;

impl VersionOptions {
    /// Apply one layer of user input.
    ///
    /// The versioning mode is fixed by the caller; options that belong to
    /// the other mode are ignored.
    pub fn apply(&mut self, input: &VersionUserConfig) {
        assign(&mut self.conventional_commits, input.conventional_commits.as_ref());

        if self.use_legacy_versioning {
            assign_opt(&mut self.generator, input.generator.as_ref());
            merge_into(&mut self.generator_options, input.generator_options.as_ref());
        } else {
            assign_opt(&mut self.version_actions, input.version_actions.as_ref());
            merge_into(
                &mut self.version_actions_options,
                input.version_actions_options.as_ref(),
            );
        }

        assign_opt(&mut self.specifier_source, input.specifier_source.as_ref());
        assign_opt(
            &mut self.current_version_resolver,
            input.current_version_resolver.as_ref(),
        );
        merge_into(
            &mut self.current_version_resolver_metadata,
            input.current_version_resolver_metadata.as_ref(),
        );
        assign_opt(
            &mut self.fallback_current_version_resolver,
            input.fallback_current_version_resolver.as_ref(),
        );
        assign_opt(&mut self.version_prefix, input.version_prefix.as_ref());
        assign_opt(&mut self.preid, input.preid.as_ref());
        assign_opt(
            &mut self.manifest_roots_to_update,
            input.manifest_roots_to_update.as_ref(),
        );
        assign_opt(
            &mut self.adjust_semver_bumps_for_zero_major_version,
            input.adjust_semver_bumps_for_zero_major_version.as_ref(),
        );
        assign(&mut self.log_unchanged_projects, input.log_unchanged_projects.as_ref());
        assign(&mut self.update_dependents, input.update_dependents.as_ref());
        assign(
            &mut self.preserve_local_dependency_protocols,
            input.preserve_local_dependency_protocols.as_ref(),
        );

        if input.conventional_commits == Some(true) {
            self.set_option(
                "currentVersionResolver",
                CURRENT_VERSION_RESOLVER_GIT_TAG,
            );
            self.set_option("specifierSource", SPECIFIER_SOURCE_CONVENTIONAL_COMMITS);
        }
    }

    /// Force the specifier source used when version plans are enabled
    pub fn use_version_plans(&mut self) {
        self.set_option("specifierSource", SPECIFIER_SOURCE_VERSION_PLANS);
    }

    /// Drop a `version-plans` specifier source, in whichever slot the active
    /// mode reads it from
    fn drop_version_plans_specifier(&mut self) {
        let version_plans = Value::String(SPECIFIER_SOURCE_VERSION_PLANS.to_owned());
        if self.use_legacy_versioning {
            if let Some(options) = self.generator_options.as_mut() {
                if options.get("specifierSource") == Some(&version_plans) {
                    options.remove("specifierSource");
                }
            }
        } else if self.specifier_source.as_deref() == Some(SPECIFIER_SOURCE_VERSION_PLANS) {
            self.specifier_source = None;
        }
    }

    /// Set a resolver option where the active mode reads it: inside
    /// `generatorOptions` for legacy versioning, at the top level otherwise.
    fn set_option(&mut self, key: &str, value: &str) {
        if self.use_legacy_versioning {
            self.generator_options
                .get_or_insert_with(Default::default)
                .insert(key.to_owned(), Value::String(value.to_owned()));
            return;
        }

        let slot = match key {
            "currentVersionResolver" => &mut self.current_version_resolver,
            _ => &mut self.specifier_source,
        };
        *slot = Some(value.to_owned());
    }
}

/// Workspace version options before the version-plans side effect.
///
/// Groups inherit from this value, so a group that turns version plans off
/// does not see the forced specifier source.
#[must_use]
pub fn resolve_workspace_version_options(input: Option<&VersionUserConfig>) -> VersionOptions {
    let legacy = input
        .and_then(|v| v.use_legacy_versioning)
        .unwrap_or(false);
    let mut options = version_options_defaults(legacy);
    if let Some(input) = input {
        options.apply(input);
    }
    options
}

/// Final workspace `version` block
#[must_use]
pub fn resolve_workspace_version(
    options: &VersionOptions,
    input: Option<&VersionUserConfig>,
    git: GitConfig,
    version_plans_enabled: bool,
) -> VersionConfig {
    let mut options = options.clone();
    if version_plans_enabled {
        options.use_version_plans();
    }

    VersionConfig {
        options,
        pre_version_command: input
            .and_then(|v| v.pre_version_command.clone())
            .unwrap_or_default(),
        git,
    }
}

/// A group's `version` block, layered on the workspace options.
///
/// When the workspace uses version plans and the group does not, a
/// `version-plans` specifier source inherited from the workspace belongs to
/// the workspace's plans and is dropped unless the group sets it itself.
#[must_use]
pub fn resolve_group_version(
    group_name: &str,
    workspace: &VersionOptions,
    input: Option<&VersionUserConfig>,
    workspace_version_plans: bool,
    version_plans_enabled: bool,
) -> GroupVersionConfig {
    let mut options = workspace.clone();
    if workspace_version_plans
        && !version_plans_enabled
        && !input.is_some_and(VersionUserConfig::sets_specifier_source)
    {
        options.drop_version_plans_specifier();
    }
    if let Some(input) = input {
        warn_workspace_only_fields(group_name, input);
        options.apply(input);
    }
    if version_plans_enabled {
        options.use_version_plans();
    }

    GroupVersionConfig {
        options,
        group_pre_version_command: input
            .and_then(|v| v.group_pre_version_command.clone())
            .unwrap_or_default(),
    }
}

fn warn_workspace_only_fields(group_name: &str, input: &VersionUserConfig) {
    let ignored = [
        ("useLegacyVersioning", input.use_legacy_versioning.is_some()),
        ("preVersionCommand", input.pre_version_command.is_some()),
        ("git", input.git.is_some()),
    ];
    for (field, present) in ignored {
        if present {
            warn!(
                "Release group \"{group_name}\" sets version.{field}, which only applies at the workspace level and is ignored"
            );
        }
    }
}
