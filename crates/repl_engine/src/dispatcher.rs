//! Input line dispatch.

use dataset_backend::DatasetBackend;
use repl_contract::{Table, TranscriptEntry};
use tracing::debug;

use crate::{
    commands::{self, CommandContext},
    line::parse_line,
    messages,
    registry::CommandKind,
    session::SessionState,
};

/// Executes one input line against `session` and returns the updated session.
///
/// Blank input returns the session untouched. Any other input appends exactly one transcript
/// entry: the handler's table for registered keywords, or the unrecognized-command message.
/// Usage, precondition, and backend failures are ordinary result tables, never errors.
#[must_use]
pub fn submit(
    mut session: SessionState,
    backend: &dyn DatasetBackend,
    raw_line: &str,
) -> SessionState {
    let Some(parsed) = parse_line(raw_line) else {
        return session;
    };

    let result = match CommandKind::resolve(&parsed.keyword) {
        Some(kind) => {
            debug!(keyword = %parsed.keyword, args = parsed.args.len(), "dispatching command");
            commands::execute(
                kind,
                &mut CommandContext {
                    args: &parsed.args,
                    session: &mut session,
                    backend,
                },
            )
        }
        None => {
            debug!(keyword = %parsed.keyword, "unrecognized command");
            Table::message(messages::UNRECOGNIZED_COMMAND)
        }
    };

    session.transcript.append(TranscriptEntry::new(raw_line, result));
    session
}

#[cfg(test)]
mod tests {
    use dataset_backend::{MockedBackend, NoopDatasetBackend};
    use pretty_assertions::assert_eq;
    use repl_contract::DisplayMode;

    use super::*;

    #[test]
    fn blank_input_is_a_noop() {
        let session = SessionState::default();
        let after = submit(session.clone(), &NoopDatasetBackend, "   ");
        assert_eq!(after, session);
        let after = submit(after, &NoopDatasetBackend, "");
        assert!(after.transcript().is_empty());
    }

    #[test]
    fn every_non_blank_line_appends_one_entry() {
        let backend = MockedBackend::embedded().expect("fixtures");
        let lines = [
            "mode",
            "mode verbose",
            "foobar 1 2",
            "view",
            "load_file missing.csv",
            "search 0",
            "load_file numbers.csv",
            "view now",
            "view",
        ];
        let mut session = SessionState::default();
        for (index, line) in lines.iter().enumerate() {
            session = submit(session, &backend, line);
            assert_eq!(session.transcript().len(), index + 1);
            assert_eq!(session.transcript().entries()[index].input(), *line);
        }
        assert_eq!(session.mode(), DisplayMode::Verbose);
    }

    #[test]
    fn unrecognized_keyword_records_fixed_message() {
        let session = submit(SessionState::default(), &NoopDatasetBackend, "  foobar  ");
        let entry = session.transcript().last().expect("entry");
        assert_eq!(entry.input(), "foobar");
        assert_eq!(entry.result(), &Table::message("Entered unrecognized command"));
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let session = submit(SessionState::default(), &NoopDatasetBackend, "MODE verbose");
        assert_eq!(session.mode(), DisplayMode::Brief);
        assert_eq!(
            session.transcript().last().map(|entry| entry.result().clone()),
            Some(Table::message(messages::UNRECOGNIZED_COMMAND))
        );
    }
}
