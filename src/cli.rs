use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::tree::SortMode;

#[derive(Parser, Debug)]
#[command(name = "treel", version, disable_version_flag = true)]
#[command(
    about = "Display a visual tree of directories and files with colors, sizes, and depth control",
    long_about = None
)]
pub struct Cli {
    /// Root directory path
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Limit how many directory levels to display
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Include files in the tree view
    #[arg(short, long)]
    pub files: bool,

    /// Show hidden files and directories (those starting with '.')
    #[arg(short, long)]
    pub all: bool,

    /// Display file sizes in KB next to filenames
    #[arg(short, long)]
    pub size: bool,

    /// Sort entries by name, size, or modification time
    #[arg(long, value_enum, default_value_t = SortMode::Name)]
    pub sort: SortMode,

    /// Export tree output to a text file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Skip entries matching a glob (`*`, `?`); repeat or separate with '|'
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Show version information and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
