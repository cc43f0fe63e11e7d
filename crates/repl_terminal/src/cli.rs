//! Command-line parsing and help output.

use std::path::PathBuf;

use crate::error::{TerminalError, TerminalResult};

/// Options for a terminal run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Script file to execute instead of reading interactively (`-` for stdin).
    pub script: Option<PathBuf>,
    /// Suppress echoing script lines.
    pub quiet: bool,
}

/// Top-level invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CliCommand {
    /// Start the REPL.
    Run(RunOptions),
    /// Print usage.
    Help,
}

/// Parse raw command-line arguments (without the program name).
pub fn parse(args: Vec<String>) -> TerminalResult<CliCommand> {
    let mut options = RunOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => options.config = Some(required_value(&arg, args.next())?),
            "--script" => options.script = Some(required_value(&arg, args.next())?),
            "--quiet" | "-q" => options.quiet = true,
            other => {
                return Err(TerminalError::Usage(format!("unknown argument: {other}")));
            }
        }
    }
    Ok(CliCommand::Run(options))
}

fn required_value(flag: &str, value: Option<String>) -> TerminalResult<PathBuf> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| TerminalError::Usage(format!("{flag} requires a path")))
}

/// Print the canonical usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: csv-repl [--config <path>] [--script <path|->] [--quiet]\n\
         \n\
         Options:\n\
           --config <path>   Read settings from <path> instead of ./csv-repl.toml\n\
           --script <path>   Run commands from a file (`-` for stdin) and exit\n\
           --quiet, -q       Do not echo script lines\n\
           --help, -h        Show this help\n\
         \n\
         Inside the REPL, `:login` starts a session and `:help` lists commands.\n"
    );
}
