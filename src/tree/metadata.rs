//! Size and line-count metadata for tree entries

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ignore::WalkBuilder;
use log::debug;

use crate::error::{Result, ScanError};

use super::entry::EntryKind;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Placeholder shown instead of size data when a file cannot be read.
pub const UNREADABLE: &str = "(Unreadable)";

/// Size and line count of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    pub size: u64,
    /// `None` for non-regular files (sockets, fifos), which are never read.
    pub lines: Option<usize>,
}

/// Format a size in bytes with two decimals, scaling by 1024 up to PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// Total size of every regular file beneath `path`. Symlinks are not followed;
/// entries that cannot be inspected are left out of the sum.
pub fn dir_size(path: &Path) -> u64 {
    WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .build()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("skipping entry under '{}': {}", path.display(), err);
                None
            }
        })
        .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
        .filter_map(|e| match e.metadata() {
            Ok(meta) => Some(meta.len()),
            Err(err) => {
                debug!("skipping size of '{}': {}", e.path().display(), err);
                None
            }
        })
        .sum()
}

/// Query a file's size and count its lines.
///
/// Lines are counted on raw bytes, so content that is not valid UTF-8 is fine.
/// A trailing line without a terminator counts as a line.
pub fn file_metadata(path: &Path) -> Result<FileMetadata> {
    let unreadable = |source| ScanError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let meta = path.metadata().map_err(unreadable)?;
    if !meta.is_file() {
        return Ok(FileMetadata {
            size: meta.len(),
            lines: None,
        });
    }

    let file = File::open(path).map_err(unreadable)?;
    let lines = count_lines(BufReader::new(file)).map_err(unreadable)?;
    Ok(FileMetadata {
        size: meta.len(),
        lines: Some(lines),
    })
}

/// Count `\n`-terminated lines, plus one for a final unterminated line.
pub fn count_lines<R: BufRead>(mut reader: R) -> std::io::Result<usize> {
    let mut newlines = 0;
    let mut last = None;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        newlines += buf.iter().filter(|&&b| b == b'\n').count();
        last = buf.last().copied();
        let len = buf.len();
        reader.consume(len);
    }
    Ok(match last {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    })
}

/// Build the metadata suffix shown after an entry's name.
///
/// Failures are absorbed here: an unreadable file becomes the `(Unreadable)`
/// placeholder and never stops the walk.
pub fn describe(path: &Path, kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory => format!("({})", format_size(dir_size(path))),
        EntryKind::File => match file_metadata(path) {
            Ok(FileMetadata {
                size,
                lines: Some(lines),
            }) => format!("({}, {})", format_size(size), pluralize_lines(lines)),
            Ok(FileMetadata { size, lines: None }) => format!("({})", format_size(size)),
            Err(e) => {
                debug!("{}", e);
                UNREADABLE.to_string()
            }
        },
        EntryKind::Symlink | EntryKind::Unreadable => UNREADABLE.to_string(),
    }
}

fn pluralize_lines(lines: usize) -> String {
    if lines == 1 {
        "1 line".to_string()
    } else {
        format!("{} lines", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(3), "3.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
        assert_eq!(format_size(1024u64.pow(5)), "1.00 PB");
    }

    #[test]
    fn test_format_size_stops_at_petabytes() {
        assert_eq!(format_size(2048 * 1024u64.pow(5)), "2048.00 PB");
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(&b""[..]).unwrap(), 0);
        assert_eq!(count_lines(&b"one"[..]).unwrap(), 1);
        assert_eq!(count_lines(&b"one\n"[..]).unwrap(), 1);
        assert_eq!(count_lines(&b"one\ntwo"[..]).unwrap(), 2);
        assert_eq!(count_lines(&b"\n\n\n"[..]).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_binary_content() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n', 0x00, 0x80];
        assert_eq!(count_lines(bytes).unwrap(), 2);
    }

    #[test]
    fn test_file_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "one\ntwo\nthree").unwrap();

        let meta = file_metadata(&path).unwrap();
        assert_eq!(meta.size, 13);
        assert_eq!(meta.lines, Some(3));
    }

    #[test]
    fn test_file_metadata_missing_file() {
        let err = file_metadata(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, ScanError::Unreadable { .. }));
    }

    #[test]
    fn test_dir_size_sums_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "12345").unwrap();
        fs::create_dir_all(dir.path().join("x/y")).unwrap();
        fs::write(dir.path().join("x/b.txt"), "123").unwrap();
        fs::write(dir.path().join("x/y/.hidden"), "12").unwrap();

        assert_eq!(dir_size(dir.path()), 10);
    }

    #[test]
    fn test_describe_file_and_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a\nb\nc\n1").unwrap();

        assert_eq!(describe(&file, EntryKind::File), "(7.00 B, 4 lines)");
        assert_eq!(describe(dir.path(), EntryKind::Directory), "(7.00 B)");
    }

    #[test]
    fn test_describe_single_line_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "hello").unwrap();

        assert_eq!(describe(&file, EntryKind::File), "(5.00 B, 1 line)");
    }

    #[test]
    fn test_describe_file_under_a_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        // Fails with "not a directory" regardless of the caller's privileges
        let inner = file.join("inner.txt");
        assert!(matches!(
            file_metadata(&inner),
            Err(ScanError::Unreadable { .. })
        ));
        assert_eq!(describe(&inner, EntryKind::File), UNREADABLE);
    }

    #[test]
    fn test_describe_unreadable_placeholder() {
        let missing = Path::new("/nonexistent/file.txt");
        assert_eq!(describe(missing, EntryKind::File), UNREADABLE);
        assert_eq!(describe(missing, EntryKind::Unreadable), UNREADABLE);
    }
}
