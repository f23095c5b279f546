use std::process::ExitCode;

use brouter_core::logging;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible.
    logging::init_logging();

    match cli::run_from_args() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("brouter error: {err:#}");
            ExitCode::from(err.exit_code())
        }
    }
}
