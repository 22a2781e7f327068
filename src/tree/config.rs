//! Configuration types for the tree walker

use super::filter::ExclusionSet;

/// Configuration for tree walking behavior.
///
/// The default walks without a depth limit, without size annotation and
/// with the default exclusion set.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Deepest recursion level that is still listed. `None` means unlimited.
    /// Level 0 is the root's own children.
    pub max_depth: Option<usize>,
    /// Annotate entries with size (and line count for files)
    pub show_size: bool,
    pub exclude: ExclusionSet,
}
