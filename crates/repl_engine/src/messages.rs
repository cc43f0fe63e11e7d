//! User-facing result text.

use repl_contract::{CommandDescriptor, DisplayMode};

/// Result of a keyword missing from the registry.
pub const UNRECOGNIZED_COMMAND: &str = "Entered unrecognized command";
/// `mode` with a single argument other than `brief` or `verbose`.
pub const MODE_BAD_VALUE: &str = "Wrong argument provided to mode: mode <brief OR verbose>";
/// The backend could not read the requested dataset.
pub const MALFORMED_DATASET: &str = "Malformed CSV. Unable to handle this file.";
/// `view` with no dataset loaded.
pub const VIEW_BEFORE_LOAD: &str = "Attempted to view CSV before loading CSV";
/// `search` with no dataset loaded.
pub const SEARCH_BEFORE_LOAD: &str = "Attempted to search CSV before loading CSV";

/// Argument count outside the command's declared arity.
pub fn wrong_arg_count(descriptor: &CommandDescriptor) -> String {
    format!("Wrong number of arguments provided: {}", descriptor.usage)
}

/// Confirmation after `mode` succeeds.
pub fn mode_set(mode: DisplayMode) -> String {
    format!("Mode set to {mode}")
}

/// Confirmation after `load_file` succeeds.
pub fn loaded(identifier: &str) -> String {
    format!("Successfully loaded CSV at {identifier}")
}

/// `load_file` named a dataset the backend does not know.
pub fn invalid_identifier(identifier: &str) -> String {
    format!("Invalid filepath: {identifier}")
}

/// `search` named a column the loaded dataset does not have.
pub fn unknown_column(column: &str) -> String {
    format!("Column {column} not found in loaded CSV")
}
