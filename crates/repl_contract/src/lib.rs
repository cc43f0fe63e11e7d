//! Shared REPL contracts used by the dataset backend, the command engine, and the terminal.
//!
//! This crate is intentionally runtime-agnostic. It defines the tabular result shape, the
//! display mode, transcript entries, and command registration metadata without depending on any
//! I/O, rendering, or backend internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of text cells.
pub type Row = Vec<String>;

/// Ordered rows of text cells.
///
/// Rows may have unequal lengths. Nothing in the engine rejects a jagged table; renderers are
/// free to pad or refuse it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from already-textual rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Creates a table with zero rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the single-row, single-cell table used for confirmations and error messages.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            rows: vec![vec![text.into()]],
        }
    }

    /// Builds a table from raw JSON rows, normalizing every scalar cell to text.
    ///
    /// Returns `None` when a row is not an array or a cell is not a scalar.
    pub fn from_json_rows(rows: &[Value]) -> Option<Self> {
        let rows = rows
            .iter()
            .map(|row| {
                row.as_array()?
                    .iter()
                    .map(cell_text)
                    .collect::<Option<Row>>()
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { rows })
    }

    /// Returns the rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the table and returns its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the widest row.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether any two rows differ in length.
    pub fn is_jagged(&self) -> bool {
        let mut widths = self.rows.iter().map(Vec::len);
        match widths.next() {
            Some(first) => widths.any(|width| width != first),
            None => false,
        }
    }
}

impl<R, C> From<Vec<R>> for Table
where
    R: IntoIterator<Item = C>,
    C: Into<String>,
{
    fn from(rows: Vec<R>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Opaque reference to a dataset loaded by a backend.
///
/// The engine only distinguishes "loaded" from "not loaded"; the contents are meaningful to the
/// backend that issued the handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetHandle(String);

impl DatasetHandle {
    /// Creates a handle from backend-issued text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the handle text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Transcript display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Only result tables are shown.
    #[default]
    Brief,
    /// Each result is prefixed with the echoed command.
    Verbose,
}

impl DisplayMode {
    /// Keyword accepted by the `mode` command.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`DisplayMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisplayMode(pub String);

impl fmt::Display for UnknownDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display mode `{}`", self.0)
    }
}

impl std::error::Error for UnknownDisplayMode {}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "brief" => Ok(Self::Brief),
            "verbose" => Ok(Self::Verbose),
            other => Err(UnknownDisplayMode(other.to_string())),
        }
    }
}

/// One recorded command and its result. Immutable once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    input: String,
    result: Table,
}

impl TranscriptEntry {
    /// Records `input` with surrounding whitespace trimmed.
    pub fn new(input: &str, result: Table) -> Self {
        Self {
            input: input.trim().to_string(),
            result,
        }
    }

    /// The submitted command line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The table produced for the command.
    pub fn result(&self) -> &Table {
        &self.result
    }
}

/// Registration metadata for one command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    /// Exact, case-sensitive first token.
    pub keyword: &'static str,
    /// Every argument count the command accepts.
    pub arg_counts: &'static [usize],
    /// Usage string shown in argument-count errors.
    pub usage: &'static str,
    /// Short description.
    pub summary: &'static str,
}

impl CommandDescriptor {
    /// Whether `count` positional arguments satisfy the declared arity.
    pub fn accepts(&self, count: usize) -> bool {
        self.arg_counts.contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_rows_normalize_numbers_to_text() {
        let rows = json!([[1, 2.5, "x"], [true, null]]);
        let table = Table::from_json_rows(rows.as_array().expect("array")).expect("scalar rows");
        assert_eq!(
            table,
            Table::from(vec![vec!["1", "2.5", "x"], vec!["true", ""]])
        );
        assert!(table.is_jagged());
        assert_eq!(table.max_width(), 3);
    }

    #[test]
    fn json_rows_reject_nested_cells() {
        let rows = json!([[1, {"nested": true}]]);
        assert_eq!(Table::from_json_rows(rows.as_array().expect("array")), None);
        let rows = json!(["not a row"]);
        assert_eq!(Table::from_json_rows(rows.as_array().expect("array")), None);
    }

    #[test]
    fn display_mode_parses_only_exact_keywords() {
        assert_eq!("brief".parse::<DisplayMode>(), Ok(DisplayMode::Brief));
        assert_eq!("verbose".parse::<DisplayMode>(), Ok(DisplayMode::Verbose));
        assert!("Verbose".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::default(), DisplayMode::Brief);
    }

    #[test]
    fn transcript_entry_trims_input() {
        let entry = TranscriptEntry::new("  view \t", Table::empty());
        assert_eq!(entry.input(), "view");
        assert!(entry.result().is_empty());
    }

    #[test]
    fn table_serializes_as_nested_arrays() {
        let table = Table::message("ok");
        assert_eq!(serde_json::to_value(&table).expect("serialize"), json!([["ok"]]));
    }
}
