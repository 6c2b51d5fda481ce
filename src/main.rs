#![forbid(unsafe_code)]

use clap::Parser;
use clap::error::ErrorKind;
use dirtag::cli::dispatch::{EXIT_FAILURE, EXIT_WRONG_ARGUMENTS};
use dirtag::cli::{Cli, run};
use dirtag::logging;
use dirtag::output::ShellReply;
use std::process;

fn main() {
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print!("{}", ShellReply::message(e.to_string().trim_end()).render());
            process::exit(EXIT_WRONG_ARGUMENTS);
        }
    };

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "dt failed");
            print!("{}", ShellReply::message(e.to_string()).render());
            EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}
