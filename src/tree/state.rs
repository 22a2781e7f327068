//! Per-walk traversal state

use std::collections::HashSet;
use std::path::PathBuf;

/// Canonical paths of directories already descended into.
///
/// One instance exists per top-level walk and is passed down the recursion
/// explicitly, so separate walks never observe each other's visits.
#[derive(Debug, Default)]
pub struct TraversalState {
    visited: HashSet<PathBuf>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit. Returns `false` if the directory was already visited.
    pub fn mark_visited(&mut self, canonical: PathBuf) -> bool {
        self.visited.insert(canonical)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
