//! Structured summary of a manifest diff for machine consumers.

use serde::Serialize;

use flagman_types::{Change, ChangeKind};

use crate::error::{DiffError, DiffResult};
use crate::manifest_diff::ManifestDiff;

/// Changes grouped by kind, each group ordered by path.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub total_changes: usize,
    pub additions: Vec<Change>,
    pub removals: Vec<Change>,
    pub modifications: Vec<Change>,
}

impl DiffReport {
    pub fn from_diff(diff: &ManifestDiff) -> Self {
        let group = |kind: ChangeKind| {
            let mut changes: Vec<Change> = diff.iter_kind(kind).cloned().collect();
            changes.sort_by(|a, b| a.path.cmp(&b.path));
            changes
        };
        Self {
            total_changes: diff.len(),
            additions: group(ChangeKind::Add),
            removals: group(ChangeKind::Remove),
            modifications: group(ChangeKind::Change),
        }
    }

    pub fn to_json_pretty(&self) -> DiffResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }
}

impl From<&ManifestDiff> for DiffReport {
    fn from(diff: &ManifestDiff) -> Self {
        Self::from_diff(diff)
    }
}
