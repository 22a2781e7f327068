//! Tree line rendering
//!
//! Pure string formatting: no filesystem access happens here. The walker
//! decides what to render; this module decides how it looks.

use crate::tree::EntryKind;

use super::color::{ColorScheme, Role};

pub const BRANCH: &str = "├── ";
pub const CONTINUE: &str = "│   ";
pub const BLANK: &str = "    ";

/// Prefix for the children of an entry, extending the entry's own prefix.
/// The last sibling's subtree gets blank padding, others a vertical bar.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, CONTINUE)
    }
}

/// Formats single tree lines with an injected color scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    scheme: ColorScheme,
}

impl Renderer {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    /// Render `<prefix>├── <name>[/][ <metadata>]\n`.
    pub fn line(
        &self,
        prefix: &str,
        name: &str,
        kind: EntryKind,
        metadata: Option<&str>,
    ) -> String {
        let mut line = String::with_capacity(prefix.len() + name.len() + 32);
        line.push_str(prefix);
        line.push_str(BRANCH);

        if kind.is_dir() {
            self.scheme.paint(&mut line, &format!("{}/", name), Role::Directory);
        } else {
            self.scheme.paint(&mut line, name, Role::File);
        }

        if let Some(meta) = metadata {
            line.push(' ');
            self.scheme.paint(&mut line, meta, Role::Metadata);
        }

        line.push('\n');
        line
    }
}
