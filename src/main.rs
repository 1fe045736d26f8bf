//! Argstone: turn a question into a templated chat link.
//!
//! This is the main entry point for the `argstone` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
pub mod browser;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod link;
pub mod logging;
pub mod prompt;
pub mod request;
pub mod server;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
