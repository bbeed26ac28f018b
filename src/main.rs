//! Binary entrypoint for the `timeword` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match timeword::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.trim_end());
            ExitCode::FAILURE
        }
    }
}
