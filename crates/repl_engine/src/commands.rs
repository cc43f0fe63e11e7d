use dataset_backend::{BackendError, ColumnSelector, DatasetBackend};
use repl_contract::{DisplayMode, Table};
use tracing::debug;

use crate::{messages, registry::CommandKind, session::SessionState};

pub(crate) struct CommandContext<'a> {
    pub(crate) args: &'a [String],
    pub(crate) session: &'a mut SessionState,
    pub(crate) backend: &'a dyn DatasetBackend,
}

pub(crate) fn execute(kind: CommandKind, context: &mut CommandContext<'_>) -> Table {
    if !kind.descriptor().accepts(context.args.len()) {
        return Table::message(messages::wrong_arg_count(kind.descriptor()));
    }
    match kind {
        CommandKind::Mode => set_mode(context),
        CommandKind::LoadFile => load_file(context),
        CommandKind::View => view(context),
        CommandKind::Search => search(context),
    }
}

fn set_mode(context: &mut CommandContext<'_>) -> Table {
    match context.args[0].parse::<DisplayMode>() {
        Ok(mode) => {
            context.session.mode = mode;
            Table::message(messages::mode_set(mode))
        }
        Err(_) => Table::message(messages::MODE_BAD_VALUE),
    }
}

fn load_file(context: &mut CommandContext<'_>) -> Table {
    let identifier = context.args[0].as_str();
    match context.backend.load(identifier) {
        Ok(handle) => {
            context.session.dataset = Some(handle);
            Table::message(messages::loaded(identifier))
        }
        // The previously loaded dataset, if any, stays active.
        Err(BackendError::Malformed(_)) => Table::message(messages::MALFORMED_DATASET),
        Err(err) => {
            debug!(identifier, error = %err, "load_file rejected");
            Table::message(messages::invalid_identifier(identifier))
        }
    }
}

fn view(context: &mut CommandContext<'_>) -> Table {
    let Some(handle) = context.session.dataset.as_ref() else {
        return Table::message(messages::VIEW_BEFORE_LOAD);
    };
    context
        .backend
        .view(handle)
        .unwrap_or_else(|err| backend_error_table(&err))
}

fn search(context: &mut CommandContext<'_>) -> Table {
    let Some(handle) = context.session.dataset.as_ref() else {
        return Table::message(messages::SEARCH_BEFORE_LOAD);
    };
    let column = ColumnSelector::parse(&context.args[0]);
    context
        .backend
        .search(handle, &column, &context.args[1])
        .unwrap_or_else(|err| backend_error_table(&err))
}

fn backend_error_table(err: &BackendError) -> Table {
    match err {
        BackendError::UnknownColumn(column) => Table::message(messages::unknown_column(column)),
        BackendError::Malformed(_) => Table::message(messages::MALFORMED_DATASET),
        BackendError::NotFound(identifier) | BackendError::NotLoaded(identifier) => {
            Table::message(messages::invalid_identifier(identifier))
        }
    }
}
