//! Line-oriented terminal host for the CSV REPL engine.
//!
//! The crate is a thin presentation layer: [`cli`] parses process arguments, [`config`] loads
//! TOML settings, [`app`] drives the session lifecycle from input lines, and [`render`] turns
//! formatted transcript entries into text tables.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;

use std::fs::File;
use std::io::{self, BufReader, Write};

use dataset_backend::MockedBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{InputMode, TerminalApp};
use crate::cli::{CliCommand, RunOptions};
use crate::config::{resolve_config, TerminalConfig};
use crate::error::{TerminalError, TerminalResult};

/// Parses `args` (without the program name) and runs the requested workflow on stdout.
pub fn run_cli(args: Vec<String>) -> TerminalResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_cli_with(args, &mut out)
}

/// Like [`run_cli`], writing transcript output to `out`.
///
/// Usage text and logs still go to stderr.
pub fn run_cli_with<W: Write>(args: Vec<String>, out: &mut W) -> TerminalResult<()> {
    match cli::parse(args)? {
        CliCommand::Help => {
            cli::print_usage();
            Ok(())
        }
        CliCommand::Run(options) => run(options, out),
    }
}

fn run<W: Write>(options: RunOptions, out: &mut W) -> TerminalResult<()> {
    let config = resolve_config(options.config.as_deref())?;
    init_tracing(&config.log_filter)?;

    let backend = load_backend(&config)?;
    let mut app = TerminalApp::new(backend, config);

    match options.script {
        Some(path) if path.as_os_str() == "-" => {
            let mode = InputMode::Script { echo: !options.quiet };
            app.run(io::stdin().lock(), out, mode)
        }
        Some(path) => {
            let file = File::open(&path).map_err(|err| {
                TerminalError::Usage(format!("cannot open script {}: {err}", path.display()))
            })?;
            let mode = InputMode::Script { echo: !options.quiet };
            app.run(BufReader::new(file), out, mode)
        }
        None => {
            if !app.lifecycle().is_logged_in() {
                writeln!(out, "CSV REPL. Type :login to start a session, :quit to leave.")?;
            }
            app.run(io::stdin().lock(), out, InputMode::Interactive)
        }
    }
}

fn load_backend(config: &TerminalConfig) -> TerminalResult<MockedBackend> {
    let backend = match &config.fixtures {
        Some(path) => MockedBackend::from_path(path)?,
        None => MockedBackend::embedded()?,
    };
    info!(datasets = ?backend.identifiers(), "dataset backend ready");
    Ok(backend)
}

fn init_tracing(default_filter: &str) -> TerminalResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|err| {
            TerminalError::Config(format!("invalid log_filter `{default_filter}`: {err}"))
        })?,
    };
    // A subscriber already installed by an embedding host wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
    Ok(())
}
