// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use file_inventory::cli::Args;
use file_inventory::logging;

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("Failed to install logger: {err}");
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage goes to stdout and the process exits with status 1.
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match file_inventory::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
