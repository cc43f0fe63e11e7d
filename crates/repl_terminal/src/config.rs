//! Typed configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{TerminalError, TerminalResult};

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "csv-repl.toml";

/// Border style used when printing result tables.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum TableStyle {
    /// Plain `+-|` borders.
    Ascii,
    /// Box-drawing borders.
    #[default]
    Modern,
    /// Box-drawing borders with rounded corners.
    Rounded,
    /// Whitespace only.
    Blank,
}

/// Terminal host settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Prompt printed before each interactive read.
    pub prompt: String,
    /// Border style for result tables.
    pub table_style: TableStyle,
    /// JSON fixture document replacing the built-in datasets.
    pub fixtures: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Start with an active session instead of logged out.
    pub auto_login: bool,
}

impl TerminalConfig {
    /// Reads and deserializes the TOML file at `path`.
    ///
    /// Read and parse failures both surface as [`TerminalError::Config`] naming the file.
    pub fn load(path: &Path) -> TerminalResult<Self> {
        let body = fs::read_to_string(path).map_err(|err| {
            TerminalError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        toml::from_str(&body).map_err(|err| {
            TerminalError::Config(format!("failed to parse {}: {err}", path.display()))
        })
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            table_style: TableStyle::default(),
            fixtures: None,
            log_filter: "warn".to_string(),
            auto_login: false,
        }
    }
}

/// Loads the config named on the command line, or the default file if it exists.
///
/// An explicitly requested file must exist; the default file is optional.
pub fn resolve_config(explicit: Option<&Path>) -> TerminalResult<TerminalConfig> {
    match explicit {
        Some(path) => TerminalConfig::load(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                TerminalConfig::load(path)
            } else {
                Ok(TerminalConfig::default())
            }
        }
    }
}
