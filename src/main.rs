//! yamato-jobs CLI entry point.
//!
//! Parses arguments, sets up logging, dispatches to the command handler and
//! maps errors to exit codes.

use std::process::ExitCode;
use yamato_jobs::cli::Cli;
use yamato_jobs::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging(cli.log_level) {
        eprintln!("Warning: {}", err);
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
