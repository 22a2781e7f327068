//! TreeWalker - depth-first directory walk producing rendered tree text

use std::fs::{self, DirEntry};
use std::path::Path;

use log::{debug, error, warn};

use crate::error::{Result, ScanError};
use crate::output::{Renderer, child_prefix};

use super::config::WalkerConfig;
use super::entry::EntryKind;
use super::metadata::describe;
use super::state::TraversalState;

/// Rendered tree text plus the number of leaf files it lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    pub tree: String,
    pub file_count: usize,
}

impl WalkResult {
    fn merge(&mut self, child: WalkResult) {
        self.tree.push_str(&child.tree);
        self.file_count += child.file_count;
    }
}

/// Walks a directory tree and renders it line by line.
///
/// The walker itself holds no mutable state: every call to [`TreeWalker::walk`]
/// starts a fresh visited set, so one walker can be reused for any number of walks.
pub struct TreeWalker {
    config: WalkerConfig,
    renderer: Renderer,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            renderer: Renderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Walk `root` and return its rendered children and total file count.
    /// The root itself is not rendered.
    pub fn walk(&self, root: &Path) -> WalkResult {
        let mut state = TraversalState::new();
        let result = self.walk_dir(root, "", 0, &mut state);
        debug!(
            "walked {} directories, {} files under '{}'",
            state.visited_count(),
            result.file_count,
            root.display()
        );
        result
    }

    fn walk_dir(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        state: &mut TraversalState,
    ) -> WalkResult {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return WalkResult::default();
        }

        // Skip symlinks to prevent cycles through linked trees
        if path.is_symlink() {
            debug!("skipping symlink '{}'", path.display());
            return WalkResult::default();
        }

        let canonical = match path.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                log_access_error(&ScanError::access(path, e));
                return WalkResult::default();
            }
        };
        if !state.mark_visited(canonical) {
            debug!("already visited '{}'", path.display());
            return WalkResult::default();
        }

        let entries = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                log_access_error(&e);
                return WalkResult::default();
            }
        };

        let mut result = WalkResult::default();
        let last_index = entries.len().saturating_sub(1);

        for (i, (kind, entry)) in entries.iter().enumerate() {
            let is_last = i == last_index;
            let entry_path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();

            let metadata = self
                .config
                .show_size
                .then(|| describe(&entry_path, *kind));
            result
                .tree
                .push_str(&self.renderer.line(prefix, &name, *kind, metadata.as_deref()));

            if kind.is_dir() {
                let nested = child_prefix(prefix, is_last);
                let child = self.walk_dir(&entry_path, &nested, depth + 1, state);
                result.merge(child);
            } else if kind.is_leaf() {
                result.file_count += 1;
            }
        }

        result
    }

    /// Read, sort and filter the immediate children of `path`.
    ///
    /// Children are ordered by file name with files and directories interleaved.
    /// Symlinks and excluded directories are dropped.
    fn read_entries(&self, path: &Path) -> Result<Vec<(EntryKind, DirEntry)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| ScanError::access(path, e))? {
            match entry {
                Ok(e) => entries.push(e),
                Err(e) => warn!("skipping entry in '{}': {}", path.display(), e),
            }
        }
        entries.sort_by_key(|e| e.file_name());

        Ok(entries
            .into_iter()
            .map(|e| (EntryKind::of(&e), e))
            .filter(|(kind, entry)| match kind {
                EntryKind::Symlink => {
                    debug!("skipping symlink '{}'", entry.path().display());
                    false
                }
                EntryKind::Directory if self.config.exclude.is_excluded(&entry.file_name()) => {
                    debug!("excluding directory '{}'", entry.path().display());
                    false
                }
                _ => true,
            })
            .collect())
    }
}

fn log_access_error(err: &ScanError) {
    match err {
        ScanError::PermissionDenied { .. } => error!("{}", err),
        _ => warn!("{}", err),
    }
}
