use serde::{Deserialize, Serialize};

use crate::pattern::IgnoreSet;

/// Options for comparing two manifests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// Leaf path patterns excluded from comparison.
    pub ignore_patterns: Vec<String>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style pattern append.
    pub fn with_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Classify the configured patterns.
    pub fn compile(&self) -> IgnoreSet {
        IgnoreSet::compile(&self.ignore_patterns)
    }
}
