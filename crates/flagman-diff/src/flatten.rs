//! Path flattening: nested values to dotted leaf paths.
//!
//! Objects recurse with one `.<key>` segment per level. Arrays, scalars, and
//! `null` are leaves; an array is stored whole at its path rather than one
//! entry per element. An empty object contributes no leaves.
//!
//! A key containing `.` can land on the same path as a nested key (`"a.b"`
//! and `"a" -> "b"`). Every value reaching a path is kept, in visiting
//! order; object keys are visited sorted, so the order is the same for any
//! two values with the same shape.

use std::collections::BTreeMap;

use serde_json::Value;

/// Fully-qualified dotted path to the leaf values found there.
///
/// Each entry holds at least one value; more than one only on a path
/// collision.
pub type LeafMap<'a> = BTreeMap<String, Vec<&'a Value>>;

/// Flatten `value` into leaf paths rooted at `prefix`.
///
/// A non-object `value` yields a single leaf at `prefix` itself. An empty
/// prefix roots paths at the object's own keys.
pub fn flatten<'a>(value: &'a Value, prefix: &str) -> LeafMap<'a> {
    let mut leaves = LeafMap::new();
    flatten_into(value, prefix.to_string(), &mut leaves);
    leaves
}

fn flatten_into<'a>(value: &'a Value, path: String, leaves: &mut LeafMap<'a>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(child, child_path, leaves);
            }
        }
        _ => leaves.entry(path).or_default().push(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_object() {
        let flag = json!({"flagType": "boolean", "defaultValue": true});
        let leaves = flatten(&flag, "flags.darkMode");

        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves["flags.darkMode.flagType"], vec![&json!("boolean")]);
        assert_eq!(leaves["flags.darkMode.defaultValue"], vec![&json!(true)]);
    }

    #[test]
    fn nested_objects_recurse() {
        let flag = json!({
            "defaultValue": {"theme": {"primary": "blue"}, "size": 3},
            "metadata": {"author": "ops"}
        });
        let leaves = flatten(&flag, "flags.ui");

        let paths: Vec<&str> = leaves.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "flags.ui.defaultValue.size",
                "flags.ui.defaultValue.theme.primary",
                "flags.ui.metadata.author",
            ]
        );
    }

    #[test]
    fn arrays_are_atomic() {
        let flag = json!({"defaultValue": [1, {"a": 2}, 3]});
        let leaves = flatten(&flag, "flags.list");

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves["flags.list.defaultValue"], vec![&json!([1, {"a": 2}, 3])]);
    }

    #[test]
    fn null_is_a_leaf() {
        let flag = json!({"description": null});
        let leaves = flatten(&flag, "flags.x");
        assert_eq!(leaves["flags.x.description"], vec![&Value::Null]);
    }

    #[test]
    fn scalar_stored_at_prefix() {
        let value = json!(42);
        let leaves = flatten(&value, "flags.answer");
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves["flags.answer"], vec![&json!(42)]);
    }

    #[test]
    fn empty_object_has_no_leaves() {
        let flag = json!({"defaultValue": {}});
        assert!(flatten(&flag, "flags.empty").is_empty());
    }

    #[test]
    fn empty_prefix_uses_bare_keys() {
        let value = json!({"a": {"b": 1}});
        let leaves = flatten(&value, "");
        assert_eq!(leaves["a.b"], vec![&json!(1)]);
    }

    #[test]
    fn dotted_key_collision_keeps_both_values() {
        let flag = json!({"defaultValue": {"a.b": 9, "a": {"b": 1}}});
        let leaves = flatten(&flag, "flags.cfg");

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves["flags.cfg.defaultValue.a.b"], vec![&json!(1), &json!(9)]);
    }
}
