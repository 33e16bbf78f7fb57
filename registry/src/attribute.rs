use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// An attribute name a provisioned function may export.
///
/// The set is closed: the scaffolding tool only ever emits these keys.
/// Variants are declared in lexicographic order, so the derived `Ord`
/// matches the key order of the generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Arn,
    CloudWatchEventRule,
    LambdaExecutionRole,
    LambdaExecutionRoleArn,
    Name,
    Region,
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Attribute::Arn => "Arn",
            Attribute::CloudWatchEventRule => "CloudWatchEventRule",
            Attribute::LambdaExecutionRole => "LambdaExecutionRole",
            Attribute::LambdaExecutionRoleArn => "LambdaExecutionRoleArn",
            Attribute::Name => "Name",
            Attribute::Region => "Region",
        };

        write!(f, "{}", str)
    }
}

impl FromStr for Attribute {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        match s {
            "Arn" => Ok(Attribute::Arn),
            "CloudWatchEventRule" => Ok(Attribute::CloudWatchEventRule),
            "LambdaExecutionRole" => Ok(Attribute::LambdaExecutionRole),
            "LambdaExecutionRoleArn" => Ok(Attribute::LambdaExecutionRoleArn),
            "Name" => Ok(Attribute::Name),
            "Region" => Ok(Attribute::Region),
            other => Err(eyre::eyre!("Unknown attribute name: {other}")),
        }
    }
}

/// Value-type indicator of an attribute.
///
/// Every attribute in a generated declaration is an opaque textual
/// identifier (an ARN, a name, a region), recorded as the literal "string".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    #[default]
    #[serde(rename = "string")]
    String,
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
        }
    }
}
