use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, RenderState};

use super::walk::{WalkOptions, list_children};

pub const CONNECTOR_MID: &str = "├── ";
pub const CONNECTOR_LAST: &str = "└── ";

const BYTES_PER_KIB: f64 = 1024.0;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Append `[<n> KB]` to file lines
    pub show_size: bool,
}

/// Colors for each kind of line. Only applied when the sink supports color.
#[derive(Debug, Clone)]
pub struct Palette {
    pub root: ColorSpec,
    pub directory: ColorSpec,
    pub file: ColorSpec,
    pub error: ColorSpec,
    pub notice: ColorSpec,
}

impl Default for Palette {
    fn default() -> Self {
        let mut root = ColorSpec::new();
        root.set_fg(Some(Color::Green)).set_bold(true);
        let mut directory = ColorSpec::new();
        directory.set_fg(Some(Color::Blue)).set_bold(true);
        let mut error = ColorSpec::new();
        error.set_fg(Some(Color::Red));
        let mut notice = ColorSpec::new();
        notice.set_fg(Some(Color::Yellow));

        Self {
            root,
            directory,
            file: ColorSpec::new(),
            error,
            notice,
        }
    }
}

/// Draws the tree below a root directory, listing each directory as it is
/// reached so output is produced in traversal order.
pub struct TreeRenderer<'a, F: FileSystem> {
    fs: &'a F,
    walk: &'a WalkOptions,
    options: &'a RenderOptions,
    palette: Palette,
}

impl<'a, F: FileSystem> TreeRenderer<'a, F> {
    pub fn new(fs: &'a F, walk: &'a WalkOptions, options: &'a RenderOptions) -> Self {
        Self {
            fs,
            walk,
            options,
            palette: Palette::default(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Root line followed by the full tree.
    pub fn render<W: WriteColor>(&self, out: &mut W, root: &Path) -> io::Result<()> {
        self.write_root(out, root)?;
        self.write_children(out, root)
    }

    pub fn write_root<W: WriteColor>(&self, out: &mut W, root: &Path) -> io::Result<()> {
        write_styled(out, &self.palette.root, &root.display().to_string())?;
        writeln!(out)
    }

    pub fn write_children<W: WriteColor>(&self, out: &mut W, dir: &Path) -> io::Result<()> {
        self.write_level(out, dir, &RenderState::root())
    }

    fn write_level<W: WriteColor>(
        &self,
        out: &mut W,
        dir: &Path,
        state: &RenderState,
    ) -> io::Result<()> {
        if !self.walk.lists_at(state.depth) {
            return Ok(());
        }

        let entries = match list_children(self.fs, dir, self.walk) {
            Ok(entries) => entries,
            Err(err) => {
                out.write_all(state.prefix.as_bytes())?;
                write_styled(out, &self.palette.error, &format!("[{err}]"))?;
                return writeln!(out);
            }
        };

        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == entries.len();
            self.write_entry(out, entry, state, is_last)?;

            if entry.is_traversable_dir() {
                self.write_level(out, &entry.path, &state.child(is_last))?;
            } else if entry.kind == EntryKind::Directory {
                log::debug!("not following symlink {}", entry.path.display());
            }
        }

        Ok(())
    }

    fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        entry: &FsEntry,
        state: &RenderState,
        is_last: bool,
    ) -> io::Result<()> {
        let connector = if is_last { CONNECTOR_LAST } else { CONNECTOR_MID };
        out.write_all(state.prefix.as_bytes())?;
        out.write_all(connector.as_bytes())?;

        let is_dir = entry.kind == EntryKind::Directory;
        let spec = if is_dir {
            &self.palette.directory
        } else {
            &self.palette.file
        };
        write_styled(out, spec, &entry.name)?;

        if self.options.show_size && !is_dir {
            write!(out, " [{}]", format_size(entry.size))?;
        }
        writeln!(out)
    }
}

/// Write `text` in `spec`, then reset so nothing bleeds into the next span.
pub fn write_styled<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    out.write_all(text.as_bytes())?;
    out.reset()
}

/// Kibibytes with one decimal, or `?` when the size is unknown.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{:.1} KB", bytes as f64 / BYTES_PER_KIB),
        None => "?".to_owned(),
    }
}
