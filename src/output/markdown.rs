//! Markdown export
//!
//! Writes the rendered tree into `directory_structure.md` inside the scanned
//! root, as a heading followed by a fenced code block. The tree passed in is
//! expected to be rendered with the plain color scheme.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, ScanError};

pub const MARKDOWN_FILE_NAME: &str = "directory_structure.md";

/// Build the Markdown document for a rendered tree.
pub fn render_markdown(root: &Path, tree: &str) -> String {
    let mut doc = format!("# Directory structure of {}\n\n```\n", root.display());
    doc.push_str(tree);
    if !tree.is_empty() && !tree.ends_with('\n') {
        doc.push('\n');
    }
    doc.push_str("```\n");
    doc
}

/// Write the Markdown document into `root` and return the written path.
pub fn export_markdown(root: &Path, tree: &str) -> Result<PathBuf> {
    let path = root.join(MARKDOWN_FILE_NAME);
    fs::write(&path, render_markdown(root, tree)).map_err(|source| ScanError::Export {
        path: path.clone(),
        source,
    })?;
    info!("directory structure exported to '{}'", path.display());
    Ok(path)
}
