use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A flag definition as it appears in a manifest.
///
/// Conventionally an object with `flagType`, `description`, and
/// `defaultValue`, but any JSON value is accepted; well-formedness is the
/// schema validator's job.
pub type FlagDefinition = serde_json::Value;

/// The value type of a feature flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    Boolean,
    String,
    Integer,
    Float,
    Object,
}

impl FlagType {
    /// Every flag type, in manifest schema order.
    pub const ALL: [FlagType; 5] = [
        FlagType::Boolean,
        FlagType::String,
        FlagType::Integer,
        FlagType::Float,
        FlagType::Object,
    ];

    /// The declared `flagType` of a flag definition.
    ///
    /// Returns `Ok(None)` when `flag` is not an object or has no string
    /// `flagType` field.
    pub fn of(flag: &FlagDefinition) -> Result<Option<FlagType>, TypeError> {
        match flag.get("flagType").and_then(|ty| ty.as_str()) {
            Some(name) => name.parse::<FlagType>().map(Some),
            None => Ok(None),
        }
    }

    /// The name used for this type in manifest documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TypeError::UnknownFlagType(s.to_string()))
    }
}
