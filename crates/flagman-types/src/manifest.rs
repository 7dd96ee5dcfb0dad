//! The flag manifest document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::flag::{FlagDefinition, FlagType};

/// A collection of flag definitions keyed by flag name.
///
/// Backed by a `HashMap`: iteration order is unspecified and nothing in
/// flagman relies on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Flag definitions by key.
    #[serde(default)]
    pub flags: HashMap<String, FlagDefinition>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_flag(mut self, key: impl Into<String>, flag: FlagDefinition) -> Self {
        self.flags.insert(key.into(), flag);
        self
    }

    /// Insert or replace a flag, returning the previous definition.
    pub fn insert(&mut self, key: impl Into<String>, flag: FlagDefinition) -> Option<FlagDefinition> {
        self.flags.insert(key.into(), flag)
    }

    pub fn get(&self, key: &str) -> Option<&FlagDefinition> {
        self.flags.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the manifest defines no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    /// The parsed `flagType` of a flag.
    ///
    /// Returns `Ok(None)` when the flag is missing, is not an object, or has
    /// no string `flagType` field.
    pub fn flag_type(&self, key: &str) -> Result<Option<FlagType>, TypeError> {
        match self.flags.get(key) {
            Some(flag) => FlagType::of(flag),
            None => Ok(None),
        }
    }

    /// Parse a manifest document. No schema validation is performed.
    pub fn from_json_str(json: &str) -> Result<Self, TypeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a manifest document from raw bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> Result<String, TypeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_manifest_document() {
        let manifest = Manifest::from_json_str(
            r#"{
                "$schema": "https://example.com/flag-manifest.json",
                "flags": {
                    "darkMode": {"flagType": "boolean", "defaultValue": false},
                    "maxItems": {"flagType": "integer", "defaultValue": 10}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("maxItems"), Some(&json!({"flagType": "integer", "defaultValue": 10})));
        assert_eq!(manifest.flag_type("darkMode"), Ok(Some(FlagType::Boolean)));
    }

    #[test]
    fn missing_flags_member_is_empty() {
        let manifest = Manifest::from_json_str("{}").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = Manifest::from_json_str("{\"flags\": ").unwrap_err();
        assert!(matches!(err, TypeError::Serialization(_)));
    }

    #[test]
    fn flag_type_of_odd_definitions() {
        let manifest = Manifest::new()
            .with_flag("scalar", json!(true))
            .with_flag("untyped", json!({"defaultValue": 1}))
            .with_flag("bogus", json!({"flagType": "decimal"}));

        assert_eq!(manifest.flag_type("scalar"), Ok(None));
        assert_eq!(manifest.flag_type("untyped"), Ok(None));
        assert_eq!(manifest.flag_type("absent"), Ok(None));
        assert!(manifest.flag_type("bogus").is_err());
    }

    #[test]
    fn insert_replaces_and_reports_previous() {
        let mut manifest = Manifest::new();
        assert_eq!(manifest.insert("a", json!({"defaultValue": 1})), None);
        assert_eq!(
            manifest.insert("a", json!({"defaultValue": 2})),
            Some(json!({"defaultValue": 1}))
        );
        manifest.insert("b", json!({"defaultValue": 3}));

        assert!(manifest.contains("a"));
        assert!(!manifest.contains("c"));
        let mut keys: Vec<&str> = manifest.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn pretty_json_round_trips() {
        let manifest = Manifest::new().with_flag("welcome", json!({"flagType": "string", "defaultValue": "hi"}));
        let text = manifest.to_json_pretty().unwrap();
        assert_eq!(Manifest::from_json_str(&text).unwrap(), manifest);
    }
}
