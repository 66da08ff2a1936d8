//! plugmeta binary entry point.

use std::process::ExitCode;

use plugmeta::ui::output;

fn main() -> ExitCode {
    match plugmeta::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
