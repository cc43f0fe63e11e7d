//! Per-login session state.

use repl_contract::{DatasetHandle, DisplayMode, TranscriptEntry};

/// Append-only, oldest-first log of command/result pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub(crate) fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Entries in submission order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Iterates entries in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything one logged-in session owns.
///
/// The default value (brief mode, empty transcript, no dataset) is the state every login starts
/// from. Only the dispatcher mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) mode: DisplayMode,
    pub(crate) transcript: Transcript,
    pub(crate) dataset: Option<DatasetHandle>,
}

impl SessionState {
    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Recorded commands and results.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle of the loaded dataset, if any.
    pub fn dataset(&self) -> Option<&DatasetHandle> {
        self.dataset.as_ref()
    }
}
