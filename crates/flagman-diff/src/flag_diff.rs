//! Flag-level comparison: does one flag differ semantically between two
//! manifests?

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::trace;

use flagman_types::flag_path;

use crate::equality::values_equal;
use crate::flatten::flatten;
use crate::pattern::IgnoreSet;
use crate::schema::is_known_property;

/// Returns `true` if `old` and `new`, the two definitions of flag `key`,
/// differ in any known, non-ignored field.
///
/// Both definitions are flattened under `flags.<key>`. A leaf path counts
/// only if it lies under a known schema field and no ignore pattern matches
/// it. Extension fields and object key order therefore never register.
///
/// If either definition is not an object there are no fields to filter, and
/// the two values are compared whole.
pub fn flag_has_changes(key: &str, old: &Value, new: &Value, ignore: &IgnoreSet) -> bool {
    if !(old.is_object() && new.is_object()) {
        return !values_equal(old, new);
    }

    let root = flag_path(key);
    let old_leaves = flatten(old, &root);
    let new_leaves = flatten(new, &root);

    let paths: BTreeSet<&str> = old_leaves
        .keys()
        .chain(new_leaves.keys())
        .map(String::as_str)
        .collect();

    for path in paths {
        if !is_known_property(path, key) {
            continue;
        }
        if ignore.is_ignored(path) {
            trace!(path, "ignored by pattern");
            continue;
        }
        match (old_leaves.get(path), new_leaves.get(path)) {
            (Some(a), Some(b)) if leaves_equal(a, b) => {}
            _ => {
                trace!(path, "leaf differs");
                return true;
            }
        }
    }

    false
}

fn leaves_equal(a: &[&Value], b: &[&Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
}
