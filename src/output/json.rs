//! JSON output formatting

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::tree::WalkResult;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub root: String,
    pub files: usize,
    pub tree: &'a str,
}

impl<'a> JsonReport<'a> {
    pub fn new(root: &Path, result: &'a WalkResult) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
            files: result.file_count,
            tree: &result.tree,
        }
    }
}

/// Print the walk result as pretty-printed JSON to stdout.
pub fn print_json(root: &Path, result: &WalkResult) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(&JsonReport::new(root, result)).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
