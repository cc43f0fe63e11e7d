//! Command dispatch and session-state engine for the CSV REPL.
//!
//! A raw input line flows through [`dispatcher::submit`]: it is split into a keyword and
//! positional arguments, resolved against the closed [`registry::CommandKind`] set, executed by
//! the matching handler (which may call a [`dataset_backend::DatasetBackend`]), and the resulting
//! table is appended to the session transcript. [`lifecycle::reduce_session`] owns the
//! login/logout toggle around that, and [`format`] projects recorded entries for display.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;
pub mod dispatcher;
pub mod format;
pub mod lifecycle;
pub mod line;
pub mod messages;
pub mod registry;
pub mod session;

pub use dispatcher::submit;
pub use format::{render_entry, render_transcript, RenderedEntry};
pub use lifecycle::{reduce_session, SessionAction, SessionEffect, SessionError, SessionLifecycle};
pub use registry::CommandKind;
pub use session::{SessionState, Transcript};
