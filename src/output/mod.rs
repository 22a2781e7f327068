//! Tree formatting and display
//!
//! - `color` - Plain/ANSI color schemes
//! - `render` - Single tree line rendering and indent prefixes
//! - `report` - Console report with the trailing file summary
//! - `markdown` - Markdown export next to the scanned tree
//! - `json` - JSON report

mod color;
mod json;
mod markdown;
mod render;
mod report;

pub use color::{ColorScheme, Role};
pub use json::{JsonReport, print_json};
pub use markdown::{MARKDOWN_FILE_NAME, export_markdown, render_markdown};
pub use render::{BLANK, BRANCH, CONTINUE, Renderer, child_prefix};
pub use report::{print_report, summary_line, write_report};
