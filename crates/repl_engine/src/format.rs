//! Display projection of transcript entries.
//!
//! Rendering happens at display time, so switching modes changes how every recorded entry is
//! shown, not only the ones recorded afterwards.

use repl_contract::{DisplayMode, Table, TranscriptEntry};

use crate::session::Transcript;

/// One entry prepared for display: optional header lines followed by the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry<'a> {
    /// Lines shown above the table. Empty in brief mode.
    pub header: Vec<String>,
    /// The recorded result, always present even when it has zero rows.
    pub table: &'a Table,
}

/// Projects `entry` for `mode`.
pub fn render_entry(entry: &TranscriptEntry, mode: DisplayMode) -> RenderedEntry<'_> {
    let header = match mode {
        DisplayMode::Brief => Vec::new(),
        DisplayMode::Verbose => vec![format!("Command: {}", entry.input()), "Output:".to_string()],
    };
    RenderedEntry {
        header,
        table: entry.result(),
    }
}

/// Projects every entry of `transcript`, oldest first.
pub fn render_transcript(transcript: &Transcript, mode: DisplayMode) -> Vec<RenderedEntry<'_>> {
    transcript
        .iter()
        .map(|entry| render_entry(entry, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brief_shows_only_the_table() {
        let entry = TranscriptEntry::new("view", Table::from(vec![vec!["1", "2"]]));
        let rendered = render_entry(&entry, DisplayMode::Brief);
        assert!(rendered.header.is_empty());
        assert_eq!(rendered.table, entry.result());
    }

    #[test]
    fn verbose_prefixes_command_and_output_lines() {
        let entry = TranscriptEntry::new("search 0 Harry", Table::empty());
        let rendered = render_entry(&entry, DisplayMode::Verbose);
        assert_eq!(
            rendered.header,
            vec!["Command: search 0 Harry".to_string(), "Output:".to_string()]
        );
        assert!(rendered.table.is_empty());
    }
}
