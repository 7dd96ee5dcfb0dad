//! Field-level breakdown of a changed flag.
//!
//! The manifest diff reports whole flags. Review output usually wants to
//! know which fields moved. This applies the same known-property and ignore
//! filtering at the granularity of top-level flag fields.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use flagman_types::{flag_path, Change, ChangeKind};

use crate::equality::values_equal;
use crate::pattern::IgnoreSet;
use crate::schema::is_known_property;

/// One top-level field of a flag that differs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: String,
    /// `None` when the field is absent on the old side.
    pub old: Option<Value>,
    /// `None` when the field is absent on the new side.
    pub new: Option<Value>,
}

impl FieldChange {
    pub fn kind(&self) -> ChangeKind {
        match (&self.old, &self.new) {
            (None, Some(_)) => ChangeKind::Add,
            (Some(_), None) => ChangeKind::Remove,
            _ => ChangeKind::Change,
        }
    }
}

/// Known, non-ignored top-level fields that differ between two definitions
/// of flag `key`, sorted by field name.
///
/// Empty when either definition is not an object.
pub fn field_changes(key: &str, old: &Value, new: &Value, ignore: &IgnoreSet) -> Vec<FieldChange> {
    let (Some(old_map), Some(new_map)) = (old.as_object(), new.as_object()) else {
        return Vec::new();
    };

    let root = flag_path(key);
    let fields: BTreeSet<&String> = old_map.keys().chain(new_map.keys()).collect();

    fields
        .into_iter()
        .filter_map(|field| {
            let path = format!("{root}.{field}");
            if !is_known_property(&path, key) || ignore.is_ignored(&path) {
                return None;
            }
            let old_val = old_map.get(field.as_str());
            let new_val = new_map.get(field.as_str());
            match (old_val, new_val) {
                (Some(a), Some(b)) if values_equal(a, b) => None,
                (None, None) => None,
                _ => Some(FieldChange {
                    field: field.clone(),
                    old: old_val.cloned(),
                    new: new_val.cloned(),
                }),
            }
        })
        .collect()
}

/// Field breakdown for a `change` record. Empty for adds and removes.
pub fn change_breakdown(change: &Change, ignore: &IgnoreSet) -> Vec<FieldChange> {
    match (&change.kind, &change.old_value, &change.new_value) {
        (ChangeKind::Change, Some(old), Some(new)) => field_changes(change.flag_key(), old, new, ignore),
        _ => Vec::new(),
    }
}
