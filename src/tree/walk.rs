use std::cmp::Ordering;
use std::path::Path;
use std::time::SystemTime;

use clap::ValueEnum;

use crate::error::ListError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry};

use super::ignore::IgnoreSet;

/// Order applied within the directory group and the file group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortMode {
    /// Entry name, ascending
    #[default]
    Name,
    /// Size in bytes, ascending; unreadable sizes count as zero
    Size,
    /// Modification time, oldest first; unreadable times count as the epoch
    Time,
}

impl SortMode {
    fn compare(self, a: &FsEntry, b: &FsEntry) -> Ordering {
        let by_key = match self {
            SortMode::Name => Ordering::Equal,
            SortMode::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
            SortMode::Time => modified_or_epoch(a).cmp(&modified_or_epoch(b)),
        };
        by_key.then_with(|| a.name.cmp(&b.name))
    }
}

fn modified_or_epoch(entry: &FsEntry) -> SystemTime {
    entry.modified.unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Number of levels to list below the root (None means unlimited)
    pub max_depth: Option<usize>,
    /// Whether files are listed alongside directories
    pub show_files: bool,
    /// Whether to show hidden entries (starting with '.')
    pub show_hidden: bool,
    pub sort: SortMode,
    pub ignore: Option<IgnoreSet>,
}

impl WalkOptions {
    /// Whether a directory at `depth` (root is 0) gets its children listed.
    pub fn lists_at(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }

    fn is_visible(&self, entry: &FsEntry) -> bool {
        if !self.show_hidden && entry.name.starts_with('.') {
            return false;
        }
        if let Some(ignore) = &self.ignore
            && ignore.matches(&entry.name)
        {
            return false;
        }
        true
    }
}

/// List the direct children of `dir` as one sibling group.
///
/// Hidden and ignored names are dropped first, then entries are split into
/// directories and files, each group sorted on its own, and directories
/// come first. Files are dropped entirely unless `show_files` is set, so
/// the last element is always the last rendered sibling.
pub fn list_children<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
) -> Result<Vec<FsEntry>, ListError> {
    let entries = fs.read_dir(dir).map_err(|err| {
        log::debug!("cannot list {}: {err}", dir.display());
        ListError::from(err)
    })?;
    log::debug!("listed {} ({} entries)", dir.display(), entries.len());

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries.into_iter().filter(|e| options.is_visible(e)) {
        match entry.kind {
            EntryKind::Directory => dirs.push(entry),
            EntryKind::File if options.show_files => files.push(entry),
            EntryKind::File | EntryKind::Other => {}
        }
    }

    dirs.sort_by(|a, b| options.sort.compare(a, b));
    files.sort_by(|a, b| options.sort.compare(a, b));

    dirs.append(&mut files);
    Ok(dirs)
}
