use std::process::ExitCode;

use repl_terminal::error::TerminalError;

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match repl_terminal::run_cli(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, TerminalError::Usage(_)) {
                repl_terminal::cli::print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
