//! Docker release options

use crate::config::defaults::{DEFAULT_DOCKER_PRE_VERSION_COMMAND, docker_defaults};
use crate::config::merge::assign_opt;
use crate::config::resolved::DockerConfig;
use crate::config::shorthand::Shorthand;
use crate::config::user::DockerUserConfig;
use tracing::warn;

impl DockerConfig {
    fn apply(&mut self, input: &DockerUserConfig) {
        if let Some(ref schemes) = input.version_schemes {
            for (name, scheme) in schemes {
                self.version_schemes.insert(name.clone(), scheme.clone());
            }
        }
        assign_opt(
            &mut self.group_pre_version_command,
            input.group_pre_version_command.as_ref(),
        );
        assign_opt(&mut self.registry_url, input.registry_url.as_ref());
        assign_opt(&mut self.repository_name, input.repository_name.as_ref());
        assign_opt(&mut self.skip_version_actions, input.skip_version_actions.as_ref());
    }

    /// The group-scoped form of a docker block
    #[must_use]
    pub fn for_group(&self) -> Self {
        Self {
            pre_version_command: None,
            group_pre_version_command: Some(self.group_pre_version_command.clone().unwrap_or_default()),
            ..self.clone()
        }
    }
}

/// Resolve the workspace docker block; `None` means docker is not used
#[must_use]
pub fn resolve_workspace_docker(input: Option<&Shorthand<DockerUserConfig>>) -> Option<DockerConfig> {
    let input = input.filter(|docker| docker.is_enabled())?;

    let mut docker = DockerConfig {
        pre_version_command: Some(DEFAULT_DOCKER_PRE_VERSION_COMMAND.to_owned()),
        ..docker_defaults()
    };
    if let Some(options) = input.options() {
        assign_opt(&mut docker.pre_version_command, options.pre_version_command.as_ref());
        docker.apply(options);
    }
    Some(docker)
}

/// Resolve a group's docker block.
///
/// A group without its own value inherits the workspace block. A group may
/// enable docker on its own even when the workspace does not.
#[must_use]
pub fn resolve_group_docker(
    group_name: &str,
    workspace: Option<&DockerConfig>,
    input: Option<&Shorthand<DockerUserConfig>>,
) -> Option<DockerConfig> {
    let inherited = workspace.map(DockerConfig::for_group);

    let Some(input) = input else {
        return inherited;
    };
    if !input.is_enabled() {
        return None;
    }

    let mut docker = inherited.unwrap_or_else(docker_defaults);
    if let Some(options) = input.options() {
        if options.pre_version_command.is_some() {
            warn!(
                "Release group \"{group_name}\" sets docker.preVersionCommand; use groupPreVersionCommand for group-scoped commands"
            );
        }
        docker.apply(options);
    }
    Some(docker)
}
