//! tree-scribe - Render a directory tree with sizes, line counts and Markdown export

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use output::{ColorScheme, Renderer, export_markdown, print_json, print_report};
pub use tree::{ExclusionSet, TreeWalker, WalkResult, WalkerConfig, format_size};
