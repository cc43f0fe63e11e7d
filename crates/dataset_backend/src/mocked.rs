//! In-memory backend seeded from JSON fixtures.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use repl_contract::{DatasetHandle, Row, Table};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{BackendError, ColumnSelector, DatasetBackend};

const EMBEDDED_FIXTURES: &str = include_str!("../data/mocked_datasets.json");

/// Failures while reading a fixture document.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixtures {}: {source}", .path.display())]
    Io {
        /// Fixture file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The fixture document is not valid JSON of the expected shape.
    #[error("failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two fixtures share an identifier.
    #[error("duplicate fixture identifier `{0}`")]
    Duplicate(String),
}

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    datasets: Vec<FixtureRecord>,
}

#[derive(Debug, Deserialize)]
struct FixtureRecord {
    identifier: String,
    #[serde(default)]
    has_header: bool,
    rows: Vec<Value>,
}

#[derive(Debug, Clone)]
struct Fixture {
    has_header: bool,
    // Raw so that malformed fixtures survive until someone tries to load them.
    rows: Vec<Value>,
}

impl Fixture {
    fn table(&self) -> Option<Table> {
        Table::from_json_rows(&self.rows)
    }
}

/// Backend answering from a fixed set of named in-memory datasets.
#[derive(Debug, Clone, Default)]
pub struct MockedBackend {
    fixtures: BTreeMap<String, Fixture>,
}

impl MockedBackend {
    /// Builds the backend from the fixtures compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the embedded document is invalid.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    /// Builds the backend from a fixture document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the file cannot be read and the other variants when
    /// its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let body = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let backend = Self::from_json(&body)?;
        info!(path = %path.display(), datasets = backend.fixtures.len(), "loaded dataset fixtures");
        Ok(backend)
    }

    /// Builds the backend from a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] for invalid JSON and [`FixtureError::Duplicate`] when an
    /// identifier appears twice.
    pub fn from_json(body: &str) -> Result<Self, FixtureError> {
        let document: FixtureDocument = serde_json::from_str(body)?;
        let mut fixtures = BTreeMap::new();
        for record in document.datasets {
            let fixture = Fixture {
                has_header: record.has_header,
                rows: record.rows,
            };
            if fixtures.insert(record.identifier.clone(), fixture).is_some() {
                return Err(FixtureError::Duplicate(record.identifier));
            }
        }
        Ok(Self { fixtures })
    }

    /// Identifiers of every known dataset, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        self.fixtures.keys().map(String::as_str).collect()
    }

    fn fixture(&self, handle: &DatasetHandle) -> Result<&Fixture, BackendError> {
        self.fixtures
            .get(handle.as_str())
            .ok_or_else(|| BackendError::NotLoaded(handle.as_str().to_string()))
    }
}

impl DatasetBackend for MockedBackend {
    fn load(&self, identifier: &str) -> Result<DatasetHandle, BackendError> {
        let fixture = self
            .fixtures
            .get(identifier)
            .ok_or_else(|| BackendError::NotFound(identifier.to_string()))?;
        if fixture.table().is_none() {
            warn!(identifier, "fixture rows are not a table of scalar cells");
            return Err(BackendError::Malformed(identifier.to_string()));
        }
        debug!(identifier, "dataset loaded");
        Ok(DatasetHandle::new(identifier))
    }

    fn view(&self, handle: &DatasetHandle) -> Result<Table, BackendError> {
        self.fixture(handle)?
            .table()
            .ok_or_else(|| BackendError::Malformed(handle.as_str().to_string()))
    }

    fn search(
        &self,
        handle: &DatasetHandle,
        column: &ColumnSelector,
        value: &str,
    ) -> Result<Table, BackendError> {
        let fixture = self.fixture(handle)?;
        let table = fixture
            .table()
            .ok_or_else(|| BackendError::Malformed(handle.as_str().to_string()))?;
        let mut rows = table.into_rows();
        let header = if fixture.has_header && !rows.is_empty() {
            Some(rows.remove(0))
        } else {
            None
        };
        let index = resolve_column(column, header.as_ref(), &rows)
            .ok_or_else(|| BackendError::UnknownColumn(column.to_string()))?;

        Ok(Table::new(
            rows.into_iter()
                .filter(|row| row.get(index).is_some_and(|cell| cell == value))
                .collect(),
        ))
    }
}

fn resolve_column(column: &ColumnSelector, header: Option<&Row>, body: &[Row]) -> Option<usize> {
    match column {
        ColumnSelector::Header(name) => header?.iter().position(|cell| cell == name),
        ColumnSelector::Index(index) => {
            let width = header
                .into_iter()
                .chain(body)
                .map(Vec::len)
                .max()
                .unwrap_or(0);
            (width == 0 || *index < width).then_some(*index)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    fn backend() -> MockedBackend {
        MockedBackend::embedded().expect("embedded fixtures")
    }

    fn load(backend: &MockedBackend, identifier: &str) -> DatasetHandle {
        backend.load(identifier).expect("load fixture")
    }

    #[test]
    fn embedded_fixtures_cover_sample_files() {
        assert_eq!(
            backend().identifiers(),
            vec![
                "empty.csv",
                "jagged.csv",
                "malformed.csv",
                "names_and_ages.csv",
                "numbers.csv",
                "one_col.csv",
                "one_row.csv",
            ]
        );
    }

    #[test]
    fn view_returns_numbers_as_text() {
        let backend = backend();
        let handle = load(&backend, "numbers.csv");
        assert_eq!(
            backend.view(&handle).expect("view"),
            Table::from(vec![
                vec!["1", "2", "3", "4", "5"],
                vec!["5", "4", "3", "2", "1"],
                vec!["0", "1", "0", "1", "0"],
            ])
        );
    }

    #[test]
    fn load_reports_missing_and_malformed() {
        let backend = backend();
        assert_eq!(
            backend.load("missing.csv"),
            Err(BackendError::NotFound("missing.csv".to_string()))
        );
        assert_eq!(
            backend.load("malformed.csv"),
            Err(BackendError::Malformed("malformed.csv".to_string()))
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn malformed_load_logs_warning() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let backend = backend();
        let result = tracing::subscriber::with_default(subscriber, || {
            backend.load("malformed.csv")
        });
        assert!(matches!(result, Err(BackendError::Malformed(_))));

        let text = String::from_utf8(log.0.lock().expect("log buffer").clone()).expect("utf8");
        assert!(text.contains("WARN"));
        assert!(text.contains("malformed.csv"));
    }

    #[test]
    fn search_by_index_skips_header() {
        let backend = backend();
        let handle = load(&backend, "names_and_ages.csv");
        let found = backend
            .search(&handle, &ColumnSelector::Index(0), "Harry")
            .expect("search");
        assert_eq!(
            found,
            Table::from(vec![vec!["Harry", "Potter", "56"], vec!["Harry", "Harry", "12"]])
        );
        let header_only = backend
            .search(&handle, &ColumnSelector::Index(0), "first name")
            .expect("search");
        assert!(header_only.is_empty());
    }

    #[test]
    fn search_by_header_name() {
        let backend = backend();
        let handle = load(&backend, "names_and_ages.csv");
        let found = backend
            .search(&handle, &ColumnSelector::parse("last name"), "Fish")
            .expect("search");
        assert_eq!(found, Table::from(vec![vec!["Danny", "Fish", "23"]]));
    }

    #[test]
    fn search_without_header_rejects_names() {
        let backend = backend();
        let handle = load(&backend, "numbers.csv");
        assert_eq!(
            backend.search(&handle, &ColumnSelector::parse("age"), "1"),
            Err(BackendError::UnknownColumn("age".to_string()))
        );
        assert_eq!(
            backend.search(&handle, &ColumnSelector::Index(9), "1"),
            Err(BackendError::UnknownColumn("9".to_string()))
        );
        assert_eq!(
            backend
                .search(&handle, &ColumnSelector::Index(4), "0")
                .expect("search"),
            Table::from(vec![vec!["0", "1", "0", "1", "0"]])
        );
    }

    #[test]
    fn search_tolerates_jagged_rows() {
        let backend = backend();
        let handle = load(&backend, "jagged.csv");
        let found = backend
            .search(&handle, &ColumnSelector::Index(3), "extra")
            .expect("search");
        assert_eq!(
            found,
            Table::from(vec![vec!["Boston", "MA", "02108", "extra"]])
        );
        let none = backend
            .search(&handle, &ColumnSelector::parse("zip"), "02906")
            .expect("search");
        assert!(none.is_empty());
    }

    #[test]
    fn empty_dataset_searches_to_zero_rows() {
        let backend = backend();
        let handle = load(&backend, "empty.csv");
        assert!(backend.view(&handle).expect("view").is_empty());
        assert!(backend
            .search(&handle, &ColumnSelector::Index(0), "x")
            .expect("search")
            .is_empty());
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let body = r#"{"datasets": [
            {"identifier": "a.csv", "rows": []},
            {"identifier": "a.csv", "rows": [[1]]}
        ]}"#;
        assert!(matches!(
            MockedBackend::from_json(body),
            Err(FixtureError::Duplicate(id)) if id == "a.csv"
        ));
    }

    #[test]
    fn foreign_handles_are_not_loaded() {
        let backend = backend();
        assert_eq!(
            backend.view(&DatasetHandle::new("elsewhere.csv")),
            Err(BackendError::NotLoaded("elsewhere.csv".to_string()))
        );
    }

    #[test]
    fn fixtures_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "dataset-backend-fixtures-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"{"datasets": [{"identifier": "tiny.csv", "rows": [["x"]]}]}"#,
        )
        .expect("write fixtures");
        let backend = MockedBackend::from_path(&path).expect("load fixtures");
        assert_eq!(backend.identifiers(), vec!["tiny.csv"]);
        let _ = fs::remove_file(path);

        assert!(matches!(
            MockedBackend::from_path(Path::new("/definitely/not/here.json")),
            Err(FixtureError::Io { .. })
        ));
    }
}
