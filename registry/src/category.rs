use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Resource category key of the generated declaration.
///
/// Only function resources are provisioned in this backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "function")]
    Function,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Function => write!(f, "function"),
        }
    }
}

impl FromStr for Category {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        match s {
            "function" => Ok(Category::Function),
            other => Err(eyre::eyre!("Unknown resource category: {other}")),
        }
    }
}
