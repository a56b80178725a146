//! Binary entrypoint for the `strata` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match strata::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
