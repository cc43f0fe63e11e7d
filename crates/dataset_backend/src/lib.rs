//! Dataset backend contracts consumed by the REPL command handlers.
//!
//! A backend resolves dataset identifiers to [`DatasetHandle`]s and answers view and search
//! requests against a handle. Backends hold no per-session state: the active handle lives in the
//! caller's session, so discarding a session discards its dataset reference.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod mocked;

use std::fmt;

use repl_contract::{DatasetHandle, Table};
use thiserror::Error;

pub use mocked::{FixtureError, MockedBackend};

/// Column reference supplied to [`DatasetBackend::search`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSelector {
    /// Zero-based column index.
    Index(usize),
    /// Header cell text.
    Header(String),
}

impl ColumnSelector {
    /// Interprets a raw command argument: digits select by index, anything else by header.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Header(raw.to_string()),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Header(name) => f.write_str(name),
        }
    }
}

/// Failures reported by a dataset backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No dataset exists for the identifier.
    #[error("no dataset named `{0}`")]
    NotFound(String),
    /// The dataset exists but its contents cannot be read as a table.
    #[error("dataset `{0}` is malformed")]
    Malformed(String),
    /// The handle does not refer to a dataset this backend has loaded.
    #[error("dataset `{0}` is not loaded")]
    NotLoaded(String),
    /// The column selector matches no column of the dataset.
    #[error("column `{0}` not found")]
    UnknownColumn(String),
}

/// Host service for loading and querying tabular datasets.
pub trait DatasetBackend {
    /// Resolves `identifier` to a loaded dataset.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for unknown identifiers and
    /// [`BackendError::Malformed`] when the data cannot be read as a table.
    fn load(&self, identifier: &str) -> Result<DatasetHandle, BackendError>;

    /// Returns every row of the dataset behind `handle`, cells as text.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotLoaded`] when `handle` was not issued by this backend.
    fn view(&self, handle: &DatasetHandle) -> Result<Table, BackendError>;

    /// Returns the rows whose `column` cell equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotLoaded`] for foreign handles and
    /// [`BackendError::UnknownColumn`] when `column` cannot be resolved.
    fn search(
        &self,
        handle: &DatasetHandle,
        column: &ColumnSelector,
        value: &str,
    ) -> Result<Table, BackendError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend with no datasets, for hosts that only exercise non-data commands.
pub struct NoopDatasetBackend;

impl DatasetBackend for NoopDatasetBackend {
    fn load(&self, identifier: &str) -> Result<DatasetHandle, BackendError> {
        Err(BackendError::NotFound(identifier.to_string()))
    }

    fn view(&self, handle: &DatasetHandle) -> Result<Table, BackendError> {
        Err(BackendError::NotLoaded(handle.as_str().to_string()))
    }

    fn search(
        &self,
        handle: &DatasetHandle,
        _column: &ColumnSelector,
        _value: &str,
    ) -> Result<Table, BackendError> {
        Err(BackendError::NotLoaded(handle.as_str().to_string()))
    }
}
