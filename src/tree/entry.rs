//! Classification of directory listing entries

use std::fs::DirEntry;

/// What a listed entry is, judged from its own file type without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// The entry's file type could not be determined.
    Unreadable,
}

impl EntryKind {
    pub fn of(entry: &DirEntry) -> Self {
        match entry.file_type() {
            Ok(t) if t.is_symlink() => EntryKind::Symlink,
            Ok(t) if t.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(_) => EntryKind::Unreadable,
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }

    /// Leaf entries are the ones that count towards the file total.
    pub fn is_leaf(self) -> bool {
        matches!(self, EntryKind::File | EntryKind::Unreadable)
    }
}
