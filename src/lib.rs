pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod models;
pub mod tree;

use std::io::{self, IsTerminal, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use termcolor::{NoColor, StandardStream, WriteColor};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::TreeError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::tree::TreeRenderer;
use crate::tree::render::write_styled;

const BANNER: &str = "🌳  treel - Modern, colorful CLI replacement for the tree command";

/// Run one invocation: resolve the root, then render it to stdout or to
/// the export target.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout_is_terminal = io::stdout().is_terminal();
    let config = Config::resolve(cli, stdout_is_terminal)?;

    let root = resolve_root(&cli.path)?;
    if !root.exists() {
        return Err(TreeError::PathNotFound(root).into());
    }

    let mut stdout = StandardStream::stdout(config.color_choice());
    render_to(&mut stdout, &RealFileSystem, &config, &root)?;
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}

/// Absolute form of `path` with `.` and `..` folded away by text alone.
///
/// Symlinks are not consulted, so `link/..` becomes the directory holding
/// `link`. Trailing separators are dropped.
pub fn resolve_root(path: &Path) -> anyhow::Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("cannot resolve {}", path.display()))?;
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // Popping at the root is a no-op, matching `/..` == `/`.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Render `root` according to `config`, writing live output to `out`.
///
/// With an export target the root line and tree go to the file, uncolored,
/// and only the banner and a confirmation reach `out`.
pub fn render_to<W: WriteColor, F: FileSystem>(
    out: &mut W,
    fs: &F,
    config: &Config,
    root: &Path,
) -> anyhow::Result<()> {
    let renderer = TreeRenderer::new(fs, &config.walk, &config.render);
    let palette = renderer.palette();

    if config.interactive {
        writeln!(out)?;
        write_styled(out, &palette.root, BANNER)?;
        writeln!(out)?;
        writeln!(out)?;
    }

    let Some(target) = &config.output else {
        write_tree(&renderer, fs, out, root)?;
        return Ok(());
    };

    let mut buffer = NoColor::new(Vec::new());
    write_tree(&renderer, fs, &mut buffer, root)?;
    let bytes = buffer.into_inner();
    std::fs::write(target, &bytes).map_err(|source| TreeError::ExportWrite {
        path: target.clone(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), target.display());

    writeln!(out)?;
    write_styled(
        out,
        &palette.notice,
        &format!("[✔] Output saved to {}", target.display()),
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_tree<W: WriteColor, F: FileSystem>(
    renderer: &TreeRenderer<'_, F>,
    fs: &F,
    out: &mut W,
    root: &Path,
) -> io::Result<()> {
    if fs.is_dir(root) {
        renderer.render(out, root)
    } else {
        log::debug!("{} is not a directory, nothing to list", root.display());
        renderer.write_root(out, root)
    }
}
