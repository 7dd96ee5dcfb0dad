//! Change records produced by a manifest comparison.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix shared by every flag-level change path.
pub const FLAGS_PREFIX: &str = "flags";

/// What happened to a flag between two manifests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The flag exists only in the second manifest.
    Add,
    /// The flag exists only in the first manifest.
    Remove,
    /// The flag exists in both with a semantic difference.
    Change,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flag-level difference between two manifests.
///
/// Serializes as `{"type", "path", "oldValue"?, "newValue"?}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// Always `flags.<key>`.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl Change {
    /// A flag present only on the new side.
    pub fn added(key: &str, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Add,
            path: flag_path(key),
            old_value: None,
            new_value: Some(new_value),
        }
    }

    /// A flag present only on the old side.
    pub fn removed(key: &str, old_value: Value) -> Self {
        Self {
            kind: ChangeKind::Remove,
            path: flag_path(key),
            old_value: Some(old_value),
            new_value: None,
        }
    }

    /// A flag whose definition differs; carries both whole definitions.
    pub fn changed(key: &str, old_value: Value, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Change,
            path: flag_path(key),
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// The flag key this change refers to.
    pub fn flag_key(&self) -> &str {
        self.path
            .strip_prefix(FLAGS_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.path)
    }
}

/// The path of a flag inside a manifest: `flags.<key>`.
pub fn flag_path(key: &str) -> String {
    format!("{FLAGS_PREFIX}.{key}")
}
