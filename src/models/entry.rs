use std::path::PathBuf;
use std::time::SystemTime;

/// What an entry resolves to. Symlinks are classified by their target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub is_symlink: bool,
    /// Byte size, `None` when it could not be read.
    pub size: Option<u64>,
    pub modified: Option<SystemTime>,
}

impl FsEntry {
    /// Whether the walk should descend into this entry.
    pub fn is_traversable_dir(&self) -> bool {
        self.kind == EntryKind::Directory && !self.is_symlink
    }
}
