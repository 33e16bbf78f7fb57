//! Reading and writing the generated declaration artifact
//!
//! The artifact is a TypeScript type declaration whose body is plain JSON.
//! Emitting is serialization of the registry; parsing strips the type alias
//! prefix and deserializes the body back.

use crate::Registry;
use color_eyre::eyre::{self, WrapErr};
use regex::Regex;
use std::path::Path;

/// Name of the exported type alias in the artifact
pub const TYPE_NAME: &str = "AmplifyDependentResourcesAttributes";

/// Default location of the artifact inside a backend directory
pub const DEFAULT_PATH: &str = "amplify/backend/types/amplify-dependent-resources-ref.d.ts";

/// Render the declaration artifact for a registry
///
/// Sorted maps plus two-space pretty printing reproduce the artifact byte
/// for byte, so regeneration only touches the file when provisioning
/// actually changed.
pub fn emit(registry: &Registry) -> eyre::Result<String> {
    let body = serde_json::to_string_pretty(registry)
        .wrap_err("Failed to serialize the resource registry")?;

    Ok(format!("export type {TYPE_NAME} = {body}"))
}

/// Parse a declaration artifact back into a registry
pub fn parse(source: &str) -> eyre::Result<Registry> {
    let prefix = Regex::new(r"^\s*export\s+type\s+[A-Za-z_][A-Za-z0-9_]*\s*=\s*")?;

    let matched = prefix.find(source).ok_or_else(|| {
        eyre::eyre!("Not a resource declaration: missing `export type <Name> =` prefix")
    })?;

    let body = source[matched.end()..].trim_end().trim_end_matches(';');

    let registry: Registry =
        serde_json::from_str(body).wrap_err("Failed to parse the declaration body")?;

    registry.validate()?;
    Ok(registry)
}

/// Read and parse a declaration file
pub fn parse_file(path: &Path) -> eyre::Result<Registry> {
    let source = std::fs::read_to_string(path)
        .wrap_err(format!("Failed to read declaration file: {path:?}"))?;

    parse(&source)
}

/// Replace the declaration file with a freshly rendered one
///
/// The artifact is regenerated wholesale: the new content is written to a
/// temporary file first and renamed over the old one.
pub fn write_file(registry: &Registry, path: &Path) -> eyre::Result<()> {
    let rendered = emit(registry)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .wrap_err(format!("Failed to create output directory: {parent:?}"))?;
        }
    }

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, &rendered).wrap_err(format!("Failed to write {tmp:?}"))?;
    std::fs::rename(&tmp, path).wrap_err(format!("Failed to replace {path:?}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVISIONED: &str = r#"export type AmplifyDependentResourcesAttributes = {
  "function": {
    "ExportDynamoToS3": {
      "Arn": "string",
      "LambdaExecutionRole": "string",
      "LambdaExecutionRoleArn": "string",
      "Name": "string",
      "Region": "string"
    },
    "FoodSentinelleGraphGeneratored": {
      "Arn": "string",
      "CloudWatchEventRule": "string",
      "LambdaExecutionRole": "string",
      "LambdaExecutionRoleArn": "string",
      "Name": "string",
      "Region": "string"
    },
    "SentimentIntensityAnalyzed": {
      "Arn": "string",
      "LambdaExecutionRole": "string",
      "LambdaExecutionRoleArn": "string",
      "Name": "string",
      "Region": "string"
    },
    "apiGetRestaurant": {
      "Arn": "string",
      "LambdaExecutionRole": "string",
      "Name": "string",
      "Region": "string"
    },
    "apiGetRestaurants": {
      "Arn": "string",
      "LambdaExecutionRole": "string",
      "Name": "string",
      "Region": "string"
    },
    "apiGetVisuals": {
      "Arn": "string",
      "LambdaExecutionRole": "string",
      "Name": "string",
      "Region": "string"
    }
  }
}"#;

    #[test]
    fn emits_the_provisioned_artifact_byte_for_byte() {
        let rendered = emit(&Registry::builtin()).unwrap();
        assert_eq!(rendered, PROVISIONED);
    }

    #[test]
    fn parses_the_provisioned_artifact() {
        let registry = parse(PROVISIONED).unwrap();
        assert_eq!(registry, Registry::builtin());
    }

    #[test]
    fn round_trip_is_identity() {
        let registry = Registry::builtin();
        let parsed = parse(&emit(&registry).unwrap()).unwrap();

        assert_eq!(parsed, registry);
    }

    #[test]
    fn rejects_source_without_type_alias_prefix() {
        let error = parse(r#"{"function": {}}"#).unwrap_err();
        assert!(error.to_string().contains("export type"));
    }

    #[test]
    fn rejects_unknown_attribute_name() {
        let source = r#"export type AmplifyDependentResourcesAttributes = {
  "function": {
    "apiGetVisuals": {
      "CloudWatchLogGroup": "string"
    }
  }
}"#;

        assert!(parse(source).is_err());
    }

    #[test]
    fn rejects_non_textual_value_type() {
        let source = r#"export type AmplifyDependentResourcesAttributes = {
  "function": {
    "apiGetVisuals": {
      "Arn": "number"
    }
  }
}"#;

        assert!(parse(source).is_err());
    }

    #[test]
    fn rejects_resource_without_attributes() {
        let source = r#"export type AmplifyDependentResourcesAttributes = {
  "function": {
    "apiGetVisuals": {}
  }
}"#;

        let error = parse(source).unwrap_err();
        assert!(error.to_string().contains("apiGetVisuals"));
    }

    #[test]
    fn write_file_replaces_the_artifact_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types").join("resources-ref.d.ts");

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "export type AmplifyDependentResourcesAttributes = {}").unwrap();

        write_file(&Registry::builtin(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, PROVISIONED);
    }
}
