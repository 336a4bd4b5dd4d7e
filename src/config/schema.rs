//! JSON Schema validation for the release configuration

use anyhow::{Result, anyhow};
use jsonschema::{Draft, Validator};
use serde_json::Value;

/// Get the embedded JSON schema for the release configuration
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::options()
        .with_draft(Draft::Draft7)
        .build(&schema)
        .map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a configuration value against the schema
pub fn validate_against_schema(config: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(config)
        .map(|e| format!("  - {e}"))
        .collect();

    if error_messages.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("{}", error_messages.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_schema_compiles() {
        assert!(get_schema().is_ok());
    }

    #[test]
    fn test_accepts_shorthand_values() {
        let config = json!({
            "projects": "lib-*",
            "docker": true,
            "versionPlans": { "ignorePatternsForPlanCheck": ["*.md"] },
            "changelog": {
                "workspaceChangelog": false,
                "projectChangelogs": { "createRelease": "github", "file": false }
            },
            "conventionalCommits": { "types": { "chore": false, "deps": { "changelog": true } } }
        });
        assert!(validate_against_schema(&config).is_ok());
    }

    #[test]
    fn test_rejects_invalid_relationship() {
        let config = json!({ "groups": { "a": { "projects": ["x"], "projectsRelationship": "loose" } } });
        assert!(validate_against_schema(&config).is_err());
    }
}
