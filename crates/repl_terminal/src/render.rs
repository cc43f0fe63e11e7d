//! Text rendering of formatted transcript entries.

use repl_contract::Table;
use repl_engine::RenderedEntry;
use tabled::{builder::Builder, settings::Style};

use crate::config::TableStyle;

const EMPTY_TABLE: &str = "(no rows)";

/// Renders header lines followed by the result table. Always ends with a newline.
pub fn render_text(entry: &RenderedEntry<'_>, style: TableStyle) -> String {
    let mut text = String::new();
    for line in &entry.header {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(&table_text(entry.table, style));
    text.push('\n');
    text
}

fn table_text(table: &Table, style: TableStyle) -> String {
    if table.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    // Pad short rows so jagged tables still line up.
    let width = table.max_width();
    let mut builder = Builder::default();
    for row in table.rows() {
        let padding = width - row.len();
        builder.push_record(
            row.iter()
                .cloned()
                .chain(std::iter::repeat(String::new()).take(padding)),
        );
    }

    let mut grid = builder.build();
    match style {
        TableStyle::Ascii => {
            grid.with(Style::ascii());
        }
        TableStyle::Modern => {
            grid.with(Style::modern());
        }
        TableStyle::Rounded => {
            grid.with(Style::rounded());
        }
        TableStyle::Blank => {
            grid.with(Style::blank());
        }
    }
    grid.to_string()
}

#[cfg(test)]
mod tests {
    use repl_contract::{DisplayMode, TranscriptEntry};
    use repl_engine::render_entry;

    use super::*;

    #[test]
    fn verbose_entry_prints_headers_first() {
        let entry = TranscriptEntry::new("mode verbose", Table::message("Mode set to verbose"));
        let text = render_text(&render_entry(&entry, DisplayMode::Verbose), TableStyle::Ascii);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Command: mode verbose"));
        assert_eq!(lines.next(), Some("Output:"));
        assert!(text.contains("Mode set to verbose"));
    }

    #[test]
    fn brief_entry_prints_only_table() {
        let entry = TranscriptEntry::new("view", Table::from(vec![vec!["1", "2"], vec!["3", "4"]]));
        let text = render_text(&render_entry(&entry, DisplayMode::Brief), TableStyle::Blank);
        assert!(!text.contains("Command:"));
        assert!(text.contains('1') && text.contains('4'));
    }

    #[test]
    fn empty_results_still_render() {
        let entry = TranscriptEntry::new("search 0 nobody", Table::empty());
        let text = render_text(&render_entry(&entry, DisplayMode::Brief), TableStyle::Modern);
        assert_eq!(text, "(no rows)\n");
    }

    #[test]
    fn jagged_rows_are_padded() {
        let entry = TranscriptEntry::new(
            "view",
            Table::from(vec![vec!["a", "b", "c"], vec!["d"]]),
        );
        let text = render_text(&render_entry(&entry, DisplayMode::Brief), TableStyle::Ascii);
        let widths = text
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| line.chars().count())
            .collect::<Vec<_>>();
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0], widths[1]);
    }
}
