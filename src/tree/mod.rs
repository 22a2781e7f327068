//! Directory tree walking logic
//!
//! - `walker` drives the depth-first walk and assembles rendered text
//! - `metadata` computes sizes and line counts
//! - `filter` holds the directory exclusion set
//! - `state` tracks visited directories for a single walk

mod config;
mod entry;
mod filter;
mod metadata;
mod state;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::EntryKind;
pub use filter::{DEFAULT_EXCLUDED_DIRS, ExclusionSet};
pub use metadata::{
    FileMetadata, UNREADABLE, count_lines, describe, dir_size, file_metadata, format_size,
};
pub use state::TraversalState;
pub use walker::{TreeWalker, WalkResult};
