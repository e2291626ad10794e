use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in readable(dir, fs::read_dir(dir)?) {
            match to_fs_entry(&entry) {
                Some(fs_entry) => entries.push(fs_entry),
                None => log::warn!("skipping {}: file type unreadable", entry.path().display()),
            }
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Drop entries the OS failed to return, warning about each one.
fn readable<T>(
    dir: &Path,
    results: impl IntoIterator<Item = io::Result<T>>,
) -> impl Iterator<Item = T> {
    results.into_iter().filter_map(move |result| match result {
        Ok(item) => Some(item),
        Err(err) => {
            log::warn!("skipping unreadable entry in {}: {err}", dir.display());
            None
        }
    })
}

fn to_fs_entry(entry: &DirEntry) -> Option<FsEntry> {
    let file_type = entry.file_type().ok()?;
    let path = entry.path();
    let is_symlink = file_type.is_symlink();

    // Follow links so size, time and grouping describe the target.
    let metadata: Option<Metadata> = if is_symlink {
        fs::metadata(&path).ok()
    } else {
        entry.metadata().ok()
    };

    let kind = match &metadata {
        Some(meta) if meta.is_dir() => EntryKind::Directory,
        Some(meta) if meta.is_file() => EntryKind::File,
        Some(_) => EntryKind::Other,
        None if file_type.is_dir() => EntryKind::Directory,
        None if file_type.is_file() => EntryKind::File,
        None => EntryKind::Other,
    };

    Some(FsEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        kind,
        is_symlink,
        size: metadata.as_ref().map(Metadata::len),
        modified: metadata.as_ref().and_then(|meta| meta.modified().ok()),
        path,
    })
}
