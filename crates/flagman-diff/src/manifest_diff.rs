//! Manifest-level diff: classify every flag key as added, removed, or
//! changed.
//!
//! Changes are coarse: a `change` record carries the entire old and new
//! flag definitions. Emission order follows hash map iteration and is
//! unspecified; use [`ManifestDiff::sort_by_path`] when order matters.
//! The engine has no notion of direction. `compare(a, b)` and
//! `compare(b, a)` are mirror images, with adds and removes swapped.

use tracing::debug;

use flagman_types::{Change, ChangeKind, Manifest};

use crate::error::DiffResult;
use crate::flag_diff::flag_has_changes;
use crate::options::CompareOptions;
use crate::pattern::IgnoreSet;

/// The result of comparing two manifests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManifestDiff {
    /// At most one change per flag key, in unspecified order.
    pub changes: Vec<Change>,
}

impl ManifestDiff {
    /// Create an empty manifest diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added flags.
    pub fn additions(&self) -> usize {
        self.iter_kind(ChangeKind::Add).count()
    }

    /// Number of removed flags.
    pub fn removals(&self) -> usize {
        self.iter_kind(ChangeKind::Remove).count()
    }

    /// Number of changed flags.
    pub fn modifications(&self) -> usize {
        self.iter_kind(ChangeKind::Change).count()
    }

    /// Changes of one kind.
    pub fn iter_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }

    /// Order changes by path.
    pub fn sort_by_path(&mut self) {
        self.changes.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// Consume and return the changes ordered by path.
    pub fn into_sorted(mut self) -> Vec<Change> {
        self.sort_by_path();
        self.changes
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

impl IntoIterator for ManifestDiff {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

/// Compare two manifests.
///
/// - Keys only in `new` are `add` changes carrying the new definition.
/// - Keys only in `old` are `remove` changes carrying the old definition.
/// - Keys in both whose definitions differ semantically (see
///   [`flag_has_changes`]) are `change` changes carrying both definitions.
///
/// Never fails on well-formed input; the result type keeps the signature
/// uniform with the rest of the crate.
pub fn compare(old: &Manifest, new: &Manifest, options: &CompareOptions) -> DiffResult<ManifestDiff> {
    compare_with(old, new, &options.compile())
}

/// Compare two manifests with a pre-compiled ignore set.
pub fn compare_with(old: &Manifest, new: &Manifest, ignore: &IgnoreSet) -> DiffResult<ManifestDiff> {
    let mut changes = Vec::new();

    // Changes and additions.
    for (key, new_flag) in &new.flags {
        let change = match old.flags.get(key) {
            Some(old_flag) => {
                if !flag_has_changes(key, old_flag, new_flag, ignore) {
                    continue;
                }
                Change::changed(key, old_flag.clone(), new_flag.clone())
            }
            None => Change::added(key, new_flag.clone()),
        };
        debug!(path = %change.path, kind = %change.kind, "flag differs");
        changes.push(change);
    }

    // Removals.
    for (key, old_flag) in &old.flags {
        if !new.flags.contains_key(key) {
            let change = Change::removed(key, old_flag.clone());
            debug!(path = %change.path, kind = %change.kind, "flag differs");
            changes.push(change);
        }
    }

    let diff = ManifestDiff { changes };
    debug!(
        adds = diff.additions(),
        removes = diff.removals(),
        changes = diff.modifications(),
        ignore_patterns = ignore.len(),
        "manifest comparison complete"
    );
    Ok(diff)
}
