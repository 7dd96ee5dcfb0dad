//! Diff engine for flagman.
//!
//! Detects semantic differences between two versions of a feature flag
//! manifest. Flag definitions are flattened to dotted leaf paths; paths
//! outside the known flag schema, or matched by a user ignore pattern, are
//! dropped; what remains is compared by value.
//!
//! # Key Types
//!
//! - [`compare`] / [`ManifestDiff`] -- Flag-level add/remove/change detection
//! - [`flag_has_changes`] -- Semantic comparison of one flag
//! - [`IgnoreSet`] / [`IgnorePattern`] -- Compiled ignore patterns
//! - [`field_changes`] / [`FieldChange`] -- Field-level breakdown of a changed flag
//! - [`DiffReport`] -- Grouped summary for JSON output
//!
//! ```rust
//! use flagman_diff::{compare, CompareOptions};
//! use flagman_types::{ChangeKind, Manifest};
//! use serde_json::json;
//!
//! let old = Manifest::new().with_flag("maxItems", json!({"flagType": "integer", "defaultValue": 10}));
//! let new = old
//!     .clone()
//!     .with_flag("welcomeMessage", json!({"flagType": "string", "defaultValue": "hi"}));
//!
//! let diff = compare(&old, &new, &CompareOptions::default()).unwrap();
//! assert_eq!(diff.len(), 1);
//! assert_eq!(diff.changes[0].kind, ChangeKind::Add);
//! assert_eq!(diff.changes[0].path, "flags.welcomeMessage");
//! ```

pub mod equality;
pub mod error;
pub mod field_diff;
pub mod flag_diff;
pub mod flatten;
pub mod manifest_diff;
pub mod options;
pub mod pattern;
pub mod report;
pub mod schema;

pub use equality::values_equal;
pub use error::{DiffError, DiffResult};
pub use field_diff::{change_breakdown, field_changes, FieldChange};
pub use flag_diff::flag_has_changes;
pub use flatten::{flatten, LeafMap};
pub use manifest_diff::{compare, compare_with, ManifestDiff};
pub use options::CompareOptions;
pub use pattern::{IgnorePattern, IgnoreSet, PatternKind};
pub use report::DiffReport;
pub use schema::{is_known_field, is_known_property, KNOWN_FLAG_PROPERTIES};
