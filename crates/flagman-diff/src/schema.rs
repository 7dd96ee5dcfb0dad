//! Known flag schema properties.
//!
//! Only leaf paths whose first segment below `flags.<key>.` is a recognized
//! schema field take part in comparison. Everything else is extension
//! metadata and is never reported.

use flagman_types::flag_path;

/// Recognized flag fields. `defaultValue` is typed per flag type, so it is
/// listed alongside the shared base fields.
pub const KNOWN_FLAG_PROPERTIES: [&str; 3] = ["flagType", "description", "defaultValue"];

/// Returns `true` if `field` is a recognized flag schema field.
pub fn is_known_field(field: &str) -> bool {
    KNOWN_FLAG_PROPERTIES.contains(&field)
}

/// Returns `true` if `path` lies under a known field of flag `flag_key`.
///
/// The flag's own path (`flags.<key>`) and any path outside it are unknown.
pub fn is_known_property(path: &str, flag_key: &str) -> bool {
    let root = flag_path(flag_key);
    path.strip_prefix(root.as_str())
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.split('.').next())
        .is_some_and(is_known_field)
}
