//! Console report: tree text followed by the file summary

use std::io::{self, Write};

use crate::tree::WalkResult;

/// Summary line printed after the tree, e.g. `├──────── [12 files]`.
pub fn summary_line(file_count: usize) -> String {
    format!("├──────── [{} files]", file_count)
}

/// Write two blank lines, the tree text, two blank lines and the summary.
pub fn write_report<W: Write>(out: &mut W, result: &WalkResult) -> io::Result<()> {
    write!(out, "\n\n{}", result.tree)?;
    write!(out, "\n\n")?;
    writeln!(out, "{}", summary_line(result.file_count))?;
    out.flush()
}

/// Print the report to stdout.
pub fn print_report(result: &WalkResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, result)
}
