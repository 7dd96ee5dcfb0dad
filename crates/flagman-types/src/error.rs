use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown flag type: {0:?} (expected boolean, string, integer, float, or object)")]
    UnknownFlagType(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TypeError {
    fn from(err: serde_json::Error) -> Self {
        TypeError::Serialization(err.to_string())
    }
}
