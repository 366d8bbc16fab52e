/*!
 * Exclusion filtering shared by the hierarchy renderer and the file walker
 */

use std::ffi::OsStr;

/// Returns true if `name` contains any of `exclusions` as a substring.
///
/// An empty exclusion list never excludes anything.
pub fn is_excluded<S: AsRef<str>>(name: &str, exclusions: &[S]) -> bool {
    exclusions
        .iter()
        .any(|pattern| name.contains(pattern.as_ref()))
}

/// Ordered set of exclusion substrings.
///
/// Matching is done against a single path component (a file or directory
/// name), never against a full path. Both traversals go through
/// [`ExclusionSet::is_excluded`] so they always agree on which entries exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl ExclusionSet {
    /// Create a set from the given substrings, keeping their order
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a file or directory name against the set
    pub fn is_excluded(&self, name: &str) -> bool {
        is_excluded(name, &self.patterns)
    }

    /// Same as [`ExclusionSet::is_excluded`], for names straight out of a
    /// directory listing.
    pub fn is_excluded_os(&self, name: &OsStr) -> bool {
        self.is_excluded(&name.to_string_lossy())
    }
}
