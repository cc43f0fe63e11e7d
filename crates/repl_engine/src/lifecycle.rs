//! Login/logout state machine around the session.

use dataset_backend::DatasetBackend;
use thiserror::Error;
use tracing::info;

use crate::{dispatcher, session::SessionState};

/// Whether a session exists. Logging out drops the session outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionLifecycle {
    /// No session; the input surface is unavailable.
    #[default]
    LoggedOut,
    /// One active session.
    LoggedIn(SessionState),
}

impl SessionLifecycle {
    /// Whether a session is active.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&SessionState> {
        match self {
            Self::LoggedIn(session) => Some(session),
            Self::LoggedOut => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_session`].
pub enum SessionAction {
    /// Flip between logged out and logged in.
    ToggleLogin,
    /// Run one input line in the active session.
    Submit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presentation intents produced by a transition.
pub enum SessionEffect {
    /// The input surface became available.
    InputEnabled,
    /// The input surface became unavailable.
    InputDisabled,
    /// A transcript entry was appended at `index`.
    EntryAppended {
        /// Position of the new entry.
        index: usize,
    },
    /// The pending input buffer should be emptied.
    ClearInput,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Lifecycle misuse.
pub enum SessionError {
    /// Input was submitted with no active session.
    #[error("no active session; log in first")]
    NotLoggedIn,
}

/// Applies `action` to `lifecycle` and returns the resulting presentation effects.
///
/// # Errors
///
/// Returns [`SessionError::NotLoggedIn`] when input is submitted while logged out. The lifecycle
/// is left unchanged in that case.
pub fn reduce_session(
    lifecycle: &mut SessionLifecycle,
    backend: &dyn DatasetBackend,
    action: SessionAction,
) -> Result<Vec<SessionEffect>, SessionError> {
    match action {
        SessionAction::ToggleLogin => Ok(match std::mem::take(lifecycle) {
            SessionLifecycle::LoggedOut => {
                *lifecycle = SessionLifecycle::LoggedIn(SessionState::default());
                info!("session started");
                vec![SessionEffect::InputEnabled]
            }
            SessionLifecycle::LoggedIn(session) => {
                info!(entries = session.transcript().len(), "session discarded");
                vec![SessionEffect::InputDisabled]
            }
        }),
        SessionAction::Submit(line) => {
            let SessionLifecycle::LoggedIn(session) = std::mem::take(lifecycle) else {
                return Err(SessionError::NotLoggedIn);
            };
            let before = session.transcript().len();
            let session = dispatcher::submit(session, backend, &line);
            let after = session.transcript().len();
            *lifecycle = SessionLifecycle::LoggedIn(session);

            if after == before {
                return Ok(Vec::new());
            }
            Ok(vec![
                SessionEffect::EntryAppended { index: before },
                SessionEffect::ClearInput,
            ])
        }
    }
}
