//! Exclusion rule handling for the filtered copy.
//! Rules are plain path fragments, matched by prefix or path segment
//! against a path relative to the copy root. They are intentionally not
//! compiled into globs: directory rules already exclude whole subtrees
//! because the walker never descends into a skipped entry.

use std::path::Path;

/// An ordered denylist of path fragments.
///
/// A relative path matches when its string form starts with a rule or
/// contains the rule as a later path segment (`/<rule>`).
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    rules: Vec<String>,
}

impl ExclusionRules {
    /// Builds a rule set from any iterable of string-like fragments.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { rules: rules.into_iter().map(Into::into).collect() }
    }

    /// A rule set that excludes nothing; copies with it are unfiltered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when `relative` (a path below the copy root) matches
    /// any rule. The copy root itself (empty path) never matches, and
    /// non-UTF-8 paths are never excluded.
    pub fn is_excluded<P: AsRef<Path>>(&self, relative: P) -> bool {
        let Some(relative) = relative.as_ref().to_str() else {
            return false;
        };
        if relative.is_empty() {
            return false;
        }
        self.rules.iter().any(|rule| {
            relative.starts_with(rule.as_str())
                || relative.contains(&format!("/{rule}"))
        })
    }
}
