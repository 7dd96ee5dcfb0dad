//! Ignore patterns over dotted leaf paths.
//!
//! Three pattern grammars are accepted:
//!
//! - **Exact**: a dotted path without wildcards, e.g. `flags.darkMode.description`.
//!   Matches that path verbatim.
//! - **Shorthand**: a single word without dots, e.g. `description`. Matches
//!   any path with a segment equal to it.
//! - **Glob**: a dotted path with `*` segments, e.g. `flags.*.description` or
//!   `metadata.*`. Each `*` stands for exactly one whole segment. The pattern
//!   matches when its segments line up with a contiguous run of the path's
//!   segments: at the start for full paths like `flags.*.description`, or
//!   anywhere for partial ones like `metadata.*`.
//!
//! Patterns are classified once when the set is built. Nothing is rejected:
//! an empty pattern or a pattern made only of `*` segments is evaluated as
//! written.

use std::fmt;

/// Path segment separator.
pub const SEPARATOR: char = '.';

/// Wildcard segment.
pub const WILDCARD: &str = "*";

/// How a pattern is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Exact,
    Shorthand,
    Glob,
}

/// One segment of a glob pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// `*`: any single segment.
    Any,
    Literal(String),
}

impl Segment {
    fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(lit) => lit == segment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Matcher {
    Exact,
    Shorthand,
    /// Always at least two segments.
    Glob(Vec<Segment>),
}

/// A classified ignore pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnorePattern {
    source: String,
    matcher: Matcher,
}

impl IgnorePattern {
    /// Classify a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let matcher = if !source.contains(SEPARATOR) {
            Matcher::Shorthand
        } else if source.split(SEPARATOR).any(|s| s == WILDCARD) {
            Matcher::Glob(
                source
                    .split(SEPARATOR)
                    .map(|s| {
                        if s == WILDCARD {
                            Segment::Any
                        } else {
                            Segment::Literal(s.to_string())
                        }
                    })
                    .collect(),
            )
        } else {
            Matcher::Exact
        };
        Self { source, matcher }
    }

    /// The pattern as supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> PatternKind {
        match self.matcher {
            Matcher::Exact => PatternKind::Exact,
            Matcher::Shorthand => PatternKind::Shorthand,
            Matcher::Glob(_) => PatternKind::Glob,
        }
    }

    /// Returns `true` if this pattern excludes `path`.
    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        self.matches_split(path, &segments)
    }

    /// `path_segments` must be `path` split on [`SEPARATOR`].
    fn matches_split(&self, path: &str, path_segments: &[&str]) -> bool {
        match &self.matcher {
            Matcher::Exact => self.source == path,
            Matcher::Shorthand => path_segments.iter().any(|s| *s == self.source),
            Matcher::Glob(pattern) => {
                // A pattern longer than the path has no window to fit in.
                if pattern.len() > path_segments.len() {
                    return false;
                }
                path_segments.windows(pattern.len()).any(|window| {
                    window
                        .iter()
                        .zip(pattern)
                        .all(|(segment, expected)| expected.matches(segment))
                })
            }
        }
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for IgnorePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for IgnorePattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

/// A compiled list of ignore patterns. A path is ignored if any pattern
/// matches it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    /// A set that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a list of pattern strings.
    pub fn compile<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|p| IgnorePattern::new(p.as_ref()))
            .collect()
    }

    pub fn push(&mut self, pattern: impl Into<IgnorePattern>) {
        self.patterns.push(pattern.into());
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnorePattern> {
        self.patterns.iter()
    }

    /// Returns `true` if any pattern matches `path`.
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_split(path, &segments))
    }
}

impl FromIterator<IgnorePattern> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = IgnorePattern>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignored(path: &str, patterns: &[&str]) -> bool {
        IgnoreSet::compile(patterns).is_ignored(path)
    }

    #[test]
    fn classification() {
        assert_eq!(IgnorePattern::new("description").kind(), PatternKind::Shorthand);
        assert_eq!(IgnorePattern::new("flags.a.description").kind(), PatternKind::Exact);
        assert_eq!(IgnorePattern::new("flags.*.description").kind(), PatternKind::Glob);
        assert_eq!(IgnorePattern::new("metadata.*").kind(), PatternKind::Glob);
        assert_eq!(IgnorePattern::new("").kind(), PatternKind::Shorthand);
    }

    #[test]
    fn glob_segments() {
        let pattern = IgnorePattern::new("flags.*.description");
        assert_eq!(
            pattern.matcher,
            Matcher::Glob(vec![
                Segment::Literal("flags".into()),
                Segment::Any,
                Segment::Literal("description".into()),
            ])
        );
        assert_eq!(IgnorePattern::new("description").matcher, Matcher::Shorthand);
    }

    #[test]
    fn exact_match() {
        assert!(ignored("flags.darkMode.description", &["flags.darkMode.description"]));
        assert!(!ignored("flags.other.description", &["flags.darkMode.description"]));
        assert!(!ignored("flags.darkMode.description.long", &["flags.darkMode.description"]));
    }

    #[test]
    fn shorthand_matches_any_segment() {
        assert!(ignored("flags.x.description", &["description"]));
        assert!(ignored("flags.description.flagType", &["description"]));
        assert!(!ignored("flags.x.descriptions", &["description"]));
    }

    #[test]
    fn full_glob_path() {
        assert!(ignored("flags.x.description", &["flags.*.description"]));
        assert!(ignored("flags.y.description", &["flags.*.description"]));
        assert!(!ignored("flags.x.defaultValue", &["flags.*.description"]));
    }

    #[test]
    fn wildcard_is_one_whole_segment() {
        assert!(ignored("flags.x.description", &["flags.*"]));
        assert!(!ignored("flags.x.y.description", &["flags.*.description"]));
        assert!(!ignored("flags.x.descriptionText", &["flags.*.description"]));
        assert!(!ignored("flags.x.description", &["flags.x*.description"]));
    }

    #[test]
    fn partial_glob_matches_window_anywhere() {
        assert!(ignored("flags.flagName.metadata.author", &["metadata.*"]));
        assert!(ignored("flags.flagName.metadata.owner.team", &["metadata.*"]));
        assert!(!ignored("flags.flagName.metadata", &["metadata.*"]));
        assert!(ignored("flags.a.metadata.author", &["flags.*.metadata.*"]));
    }

    #[test]
    fn pattern_longer_than_path_never_matches() {
        assert!(!ignored("flags.x", &["flags.*.description"]));
        assert!(!ignored("flags.x.description", &["flags.*.description.*"]));
        assert!(!ignored("a.b", &["*.*.*"]));
    }

    #[test]
    fn all_wildcard_matches_broadly() {
        assert!(ignored("flags.x.description", &["*.*"]));
        assert!(ignored("flags.x.defaultValue.nested", &["*.*.*"]));
    }

    #[test]
    fn degenerate_patterns_are_permissive() {
        assert!(!ignored("flags.x.description", &[""]));
        assert!(ignored("flags..x", &[""]));
        assert!(!ignored("flags.x.description", &["."]));
    }

    #[test]
    fn any_pattern_in_set_suffices() {
        let set = IgnoreSet::compile(["flags.other.description", "metadata.*", "description"]);
        assert_eq!(set.len(), 3);
        assert!(set.is_ignored("flags.x.description"));
        assert!(set.is_ignored("flags.x.metadata.owner"));
        assert!(!set.is_ignored("flags.x.defaultValue"));
    }

    #[test]
    fn empty_set_ignores_nothing() {
        let set = IgnoreSet::new();
        assert!(set.is_empty());
        assert!(!set.is_ignored("flags.x.description"));
    }

    #[test]
    fn push_and_display() {
        let mut set = IgnoreSet::new();
        set.push("metadata.*");
        let shown: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["metadata.*".to_string()]);
        assert_eq!(set.iter().next().map(IgnorePattern::as_str), Some("metadata.*"));
        assert!(IgnorePattern::from(String::from("a.*")).matches("a.b"));
    }
}
