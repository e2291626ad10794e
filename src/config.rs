use std::path::PathBuf;

use termcolor::ColorChoice;

use crate::cli::Cli;
use crate::tree::{IgnoreSet, RenderOptions, WalkOptions};

/// Display options resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub walk: WalkOptions,
    pub render: RenderOptions,
    pub use_color: bool,
    /// Export target; the tree is written here instead of stdout.
    pub output: Option<PathBuf>,
    /// Stdout is a terminal, so the banner is shown.
    pub interactive: bool,
}

impl Config {
    pub fn resolve(cli: &Cli, stdout_is_terminal: bool) -> anyhow::Result<Self> {
        let ignore = Some(IgnoreSet::new(&cli.ignore)?).filter(|set| !set.is_empty());

        Ok(Self {
            walk: WalkOptions {
                max_depth: cli.depth,
                show_files: cli.files,
                show_hidden: cli.all,
                sort: cli.sort,
                ignore,
            },
            render: RenderOptions {
                show_size: cli.size,
            },
            use_color: should_use_color(cli.no_color, stdout_is_terminal),
            output: cli.output.clone(),
            interactive: stdout_is_terminal,
        })
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

/// Color only on a terminal, and never when the user opted out.
pub fn should_use_color(no_color_flag: bool, stdout_is_terminal: bool) -> bool {
    if no_color_flag || !stdout_is_terminal {
        return false;
    }
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !std::env::var("TERM").is_ok_and(|term| term == "dumb")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SortMode;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("treel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn maps_flags_onto_options() {
        let config = Config::resolve(&cli(&["-d", "3", "-f", "-a", "-s", "--sort", "size"]), false)
            .unwrap();
        assert_eq!(config.walk.max_depth, Some(3));
        assert!(config.walk.show_files);
        assert!(config.walk.show_hidden);
        assert_eq!(config.walk.sort, SortMode::Size);
        assert!(config.walk.ignore.is_none());
        assert!(config.render.show_size);
        assert!(config.output.is_none());
    }

    #[test]
    fn non_terminal_disables_color_and_banner() {
        let config = Config::resolve(&cli(&[]), false).unwrap();
        assert!(!config.use_color);
        assert!(!config.interactive);
        assert!(matches!(config.color_choice(), ColorChoice::Never));
    }

    #[test]
    fn no_color_flag_wins_on_a_terminal() {
        assert!(!should_use_color(true, true));
        let config = Config::resolve(&cli(&["--no-color"]), true).unwrap();
        assert!(!config.use_color);
        assert!(config.interactive);
    }

    #[test]
    fn blank_ignore_patterns_disable_ignoring() {
        let config = Config::resolve(&cli(&["-I", " | "]), false).unwrap();
        assert!(config.walk.ignore.is_none());
    }

    #[test]
    fn ignore_patterns_are_compiled() {
        let config = Config::resolve(&cli(&["-I", "target|*.log"]), false).unwrap();
        let ignore = config.walk.ignore.unwrap();
        assert!(ignore.matches("target"));
        assert!(ignore.matches("x.log"));
    }
}
