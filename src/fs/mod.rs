mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, mock_dir, mock_entry, mock_file};

use std::io;
use std::path::Path;

use crate::models::FsEntry;

/// Directory listing seam between the walker and the disk.
pub trait FileSystem {
    /// List the direct children of `dir`, in no particular order.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;
}
