//! Directory exclusion by name

use std::ffi::OsStr;

use glob::Pattern;

/// Directory names skipped by default: version control metadata,
/// dependency caches and editor/tool state.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".mypy_cache",
    ".pytest_cache",
    ".tox",
    ".idea",
    ".vscode",
    "target",
];

/// Set of directory names whose subtrees are never rendered or visited.
///
/// Entries match either by exact name or as a glob pattern against the
/// directory's file name. Files are never matched against this set.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// An exclusion set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Add a name or glob pattern. Strings that are not valid globs
    /// still match by exact name.
    pub fn add(&mut self, name: &str) {
        if let Ok(pattern) = Pattern::new(name) {
            self.patterns.push(pattern);
        }
        self.names.push(name.to_string());
    }

    pub fn with(mut self, name: &str) -> Self {
        self.add(name);
        self
    }

    pub fn is_excluded(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.names.iter().any(|n| *n == name) || self.patterns.iter().any(|p| p.matches(&name))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        DEFAULT_EXCLUDED_DIRS
            .iter()
            .fold(Self::empty(), |set, name| set.with(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_vcs_and_caches() {
        let set = ExclusionSet::default();
        assert!(set.is_excluded(OsStr::new(".git")));
        assert!(set.is_excluded(OsStr::new("node_modules")));
        assert!(set.is_excluded(OsStr::new("__pycache__")));
        assert!(!set.is_excluded(OsStr::new("src")));
        // Exact match only, no substring matching
        assert!(!set.is_excluded(OsStr::new(".github")));
    }

    #[test]
    fn test_empty_excludes_nothing() {
        let set = ExclusionSet::empty();
        assert!(!set.is_excluded(OsStr::new(".git")));
    }

    #[test]
    fn test_glob_patterns() {
        let set = ExclusionSet::empty().with("build*").with("[abc]_out");
        assert!(set.is_excluded(OsStr::new("build")));
        assert!(set.is_excluded(OsStr::new("build-release")));
        assert!(set.is_excluded(OsStr::new("b_out")));
        assert!(!set.is_excluded(OsStr::new("d_out")));
        assert!(!set.is_excluded(OsStr::new("rebuild")));
    }

    #[test]
    fn test_invalid_glob_still_matches_exactly() {
        let set = ExclusionSet::empty().with("[broken");
        assert!(set.is_excluded(OsStr::new("[broken")));
        assert!(!set.is_excluded(OsStr::new("broken")));
    }
}
