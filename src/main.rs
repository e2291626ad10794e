use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use termcolor::{ColorChoice, StandardStream};

use treel::cli::Cli;
use treel::tree::Palette;
use treel::tree::render::write_styled;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match treel::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&cli, &err);
            ExitCode::from(1)
        }
    }
}

fn report(cli: &Cli, err: &anyhow::Error) {
    let choice = if treel::config::should_use_color(cli.no_color, io::stderr().is_terminal()) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    // Nothing left to tell the user if stderr itself is gone.
    let _ = write_styled(&mut stderr, &Palette::default().error, &format!("Error: {err:#}"))
        .and_then(|()| writeln!(stderr));
}
