use crate::{Attribute, AttributeType, Attributes};
use color_eyre::eyre::{self, WrapErr};
use serde::Deserialize;
use std::path::Path;

/// Provisioning manifest of one backend function
///
/// Describes how the function is wired up, and therefore which attributes
/// its stack exports. Maps one2one from the function's directory.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Resolved resource name (manifest override or the directory name)
    pub name: String,

    /// Whether the stack also exports the execution role ARN
    pub role_arn: bool,

    /// Schedule expression when the function is triggered by an events rule
    pub schedule: Option<String>,
}

/// FileConfig is the structure of function.toml
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    /// [function]
    /// name = "apiGetVisuals"
    #[serde(default)]
    function: FunctionSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FunctionSection {
    name: Option<String>,

    #[serde(default)]
    role_arn: bool,

    schedule: Option<String>,
}

impl Manifest {
    pub const FILE_NAME: &'static str = "function.toml";

    /// Load the manifest from a function directory
    pub fn from_path(dir: &Path) -> eyre::Result<Self> {
        let manifest_path = dir.join(Self::FILE_NAME);
        let toml_string = std::fs::read_to_string(&manifest_path)
            .wrap_err(format!("Failed to read {manifest_path:?}"))?;

        let config: FileConfig = toml::from_str(&toml_string)
            .wrap_err(format!("Failed to parse {manifest_path:?}"))?;

        // Fall back to the directory name if not explicitly set in function.toml
        let fallback = dir
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| eyre::eyre!("Function directory has no usable name: {dir:?}"))?;

        let name = config.function.name.unwrap_or_else(|| fallback.to_string());

        if name.len() > 64 {
            return Err(eyre::eyre!(
                "Function name is longer than 64 chars: {}",
                name
            ));
        }

        Ok(Manifest {
            name,
            role_arn: config.function.role_arn,
            schedule: config.function.schedule,
        })
    }

    /// Attribute set exported by the function's stack
    ///
    /// Every function exports its ARN, name, region and execution role.
    /// Scheduled functions additionally export the events rule that
    /// triggers them.
    pub fn attributes(&self) -> Attributes {
        let mut attributes: Attributes = [
            Attribute::Arn,
            Attribute::LambdaExecutionRole,
            Attribute::Name,
            Attribute::Region,
        ]
        .into_iter()
        .map(|attribute| (attribute, AttributeType::String))
        .collect();

        if self.role_arn {
            attributes.insert(Attribute::LambdaExecutionRoleArn, AttributeType::String);
        }

        if self.schedule.is_some() {
            attributes.insert(Attribute::CloudWatchEventRule, AttributeType::String);
        }

        attributes
    }
}
