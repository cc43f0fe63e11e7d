//! Line-oriented host driving the session lifecycle.
//!
//! Lines starting with `:` are terminal controls standing in for the login button and the
//! transcript view; they never reach the dispatcher or the transcript.

use std::io::{BufRead, Write};

use dataset_backend::DatasetBackend;
use repl_engine::{
    reduce_session, registry, render_entry, render_transcript, SessionAction, SessionEffect,
    SessionLifecycle,
};
use tracing::debug;

use crate::{config::TerminalConfig, error::TerminalResult, render::render_text};

/// How [`TerminalApp::run`] reads its input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    /// Print the prompt before each read.
    Interactive,
    /// Read a script; `#` lines are comments.
    Script {
        /// Echo each executed line after the prompt.
        echo: bool,
    },
}

/// Whether the read loop keeps going.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TerminalControl {
    Login,
    Logout,
    History,
    Help,
    Quit,
}

impl TerminalControl {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            ":login" => Some(Self::Login),
            ":logout" => Some(Self::Logout),
            ":history" => Some(Self::History),
            ":help" => Some(Self::Help),
            ":quit" | ":exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Terminal presentation of one REPL user.
pub struct TerminalApp<B> {
    backend: B,
    lifecycle: SessionLifecycle,
    config: TerminalConfig,
}

impl<B> TerminalApp<B>
where
    B: DatasetBackend,
{
    /// Creates the app, logged out unless `config.auto_login` is set.
    pub fn new(backend: B, config: TerminalConfig) -> Self {
        let mut lifecycle = SessionLifecycle::default();
        if config.auto_login {
            // Toggling out of the logged-out state cannot fail.
            let _ = reduce_session(&mut lifecycle, &backend, SessionAction::ToggleLogin);
        }
        Self {
            backend,
            lifecycle,
            config,
        }
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> &SessionLifecycle {
        &self.lifecycle
    }

    /// Reads lines from `input` until end of input or `:quit`.
    pub fn run<R, W>(&mut self, mut input: R, out: &mut W, mode: InputMode) -> TerminalResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            if mode == InputMode::Interactive {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let InputMode::Script { echo } = mode {
                if trimmed.starts_with('#') {
                    continue;
                }
                if echo {
                    writeln!(out, "{}{trimmed}", self.config.prompt)?;
                }
            }

            if self.handle_line(&line, out)? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles one raw input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> TerminalResult<Control> {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return match TerminalControl::parse(trimmed) {
                Some(control) => self.handle_control(control, out),
                None => {
                    writeln!(out, "unknown terminal command `{trimmed}`; try :help")?;
                    Ok(Control::Continue)
                }
            };
        }

        match reduce_session(
            &mut self.lifecycle,
            &self.backend,
            SessionAction::Submit(line.to_string()),
        ) {
            Ok(effects) => self.apply_effects(&effects, out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(Control::Continue)
    }

    fn handle_control<W: Write>(
        &mut self,
        control: TerminalControl,
        out: &mut W,
    ) -> TerminalResult<Control> {
        debug!(?control, "terminal control");
        match control {
            TerminalControl::Login | TerminalControl::Logout => {
                let wants_session = control == TerminalControl::Login;
                if self.lifecycle.is_logged_in() == wants_session {
                    let state = if wants_session { "in" } else { "out" };
                    writeln!(out, "already logged {state}")?;
                } else {
                    let effects = reduce_session(
                        &mut self.lifecycle,
                        &self.backend,
                        SessionAction::ToggleLogin,
                    )?;
                    self.apply_effects(&effects, out)?;
                }
            }
            TerminalControl::History => match self.lifecycle.session() {
                Some(session) => {
                    for entry in render_transcript(session.transcript(), session.mode()) {
                        write!(out, "{}", render_text(&entry, self.config.table_style))?;
                    }
                }
                None => writeln!(out, "no active session; log in first")?,
            },
            TerminalControl::Help => {
                for descriptor in registry::descriptors() {
                    writeln!(out, "{:<26}{}", descriptor.usage, descriptor.summary)?;
                }
                writeln!(out, "{:<26}start a session", ":login")?;
                writeln!(out, "{:<26}end the session and discard its transcript", ":logout")?;
                writeln!(out, "{:<26}show the whole transcript in the current mode", ":history")?;
                writeln!(out, "{:<26}leave", ":quit")?;
            }
            TerminalControl::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    fn apply_effects<W: Write>(&self, effects: &[SessionEffect], out: &mut W) -> TerminalResult<()> {
        for effect in effects {
            match effect {
                SessionEffect::InputEnabled => {
                    writeln!(out, "logged in; type :help for commands")?;
                }
                SessionEffect::InputDisabled => writeln!(out, "logged out")?,
                SessionEffect::EntryAppended { index } => {
                    let Some(session) = self.lifecycle.session() else {
                        continue;
                    };
                    if let Some(entry) = session.transcript().entries().get(*index) {
                        let rendered = render_entry(entry, session.mode());
                        write!(out, "{}", render_text(&rendered, self.config.table_style))?;
                    }
                }
                // Lines are consumed as they are read; there is no pending buffer to clear.
                SessionEffect::ClearInput => {}
            }
        }
        Ok(())
    }
}
