use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind),
}

/// In-memory listings keyed by directory path.
#[derive(Default)]
pub struct MockFileSystem {
    responses: RefCell<HashMap<PathBuf, Response>>,
    calls: RefCell<Vec<PathBuf>>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        self.responses
            .borrow_mut()
            .insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.responses
            .borrow_mut()
            .insert(dir.into(), Response::Err(kind));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        self.calls.borrow_mut().push(dir.to_path_buf());

        match self.responses.borrow().get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind)) => Err(io::Error::from(*kind)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.responses.borrow().contains_key(path)
    }
}

pub fn mock_dir(parent: &str, name: &str) -> FsEntry {
    mock_entry(parent, name, EntryKind::Directory, Some(4096))
}

pub fn mock_file(parent: &str, name: &str, size: u64) -> FsEntry {
    mock_entry(parent, name, EntryKind::File, Some(size))
}

pub fn mock_entry(parent: &str, name: &str, kind: EntryKind, size: Option<u64>) -> FsEntry {
    FsEntry {
        path: Path::new(parent).join(name),
        name: name.to_owned(),
        kind,
        is_symlink: false,
        size,
        modified: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000)),
    }
}
