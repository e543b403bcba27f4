//! Genesis CLI entry point: argument parsing, logging and command dispatch.

use std::io::{self, Write};

use clap::Parser;
use genesis_cli::{cli, commands, error, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, &mut out),
        cli::Command::Settings(settings_args) => {
            commands::settings_execute(settings_args, &mut out)
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args, &mut out),
    };

    result
        .and_then(|()| out.flush().map_err(Into::into))
        .map_err(error::cli_error_to_miette)
}
