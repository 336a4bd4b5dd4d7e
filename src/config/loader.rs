//! Release configuration loading and parsing

use crate::config::user::ReleaseUserConfig;
use crate::error::ReleaseError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Key under which a workspace file (such as `nx.json`) nests the release config
const WORKSPACE_RELEASE_KEY: &str = "release";

/// Load and parse the release configuration from file
pub fn load_user_config(system: &dyn System, path: &Path) -> Result<ReleaseUserConfig> {
    if !system.exists(path) {
        return Err(ReleaseError::filesystem(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let value = parse_config_value(path, &content)?;
    parse_user_config(value)
}

/// Parse raw file contents as YAML (`.yaml`/`.yml`) or JSON (anything else)
pub fn parse_config_value(path: &Path, content: &str) -> Result<Value> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        serde_yaml::from_str::<Value>(content).map_err(|e| match e.location() {
            Some(location) => ReleaseError::input(format!(
                "Failed to parse {} at line {}, column {}: {e}",
                path.display(),
                location.line(),
                location.column()
            )),
            None => ReleaseError::input(format!("Failed to parse {}: {e}", path.display())),
        })?
    } else {
        serde_json::from_str::<Value>(content).map_err(|e| {
            ReleaseError::input(format!(
                "Failed to parse {} at line {}, column {}: {e}",
                path.display(),
                e.line(),
                e.column()
            ))
        })?
    };

    Ok(parsed)
}

/// Validate a parsed value against the schema and deserialize it
pub fn parse_user_config(value: Value) -> Result<ReleaseUserConfig> {
    let value = unwrap_workspace_file(value);
    if value.is_null() {
        return Ok(ReleaseUserConfig::default());
    }

    crate::config::schema::validate_against_schema(&value)
        .map_err(|e| ReleaseError::input(format!("Release configuration validation failed:\n{e}")))?;

    serde_json::from_value(value).map_err(|e| {
        ReleaseError::input(format!("Release configuration has an unexpected shape: {e}")).into()
    })
}

fn unwrap_workspace_file(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key(WORKSPACE_RELEASE_KEY) => {
            debug!("Using the \"{WORKSPACE_RELEASE_KEY}\" section of the workspace file");
            map.remove(WORKSPACE_RELEASE_KEY).unwrap_or(Value::Null)
        }
        other => other,
    }
}
