//! Input line splitting.
//!
//! Tokens are separated by runs of whitespace and reach handlers as plain strings; there is no
//! quoting, escaping, or type coercion.

/// A non-empty input line split into its keyword and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// First token, matched case-sensitively against the registry.
    pub keyword: String,
    /// Remaining tokens in order.
    pub args: Vec<String>,
}

/// Splits `line` on whitespace. Returns `None` when the line is empty after trimming.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let keyword = tokens.next()?;
    Some(ParsedLine {
        keyword,
        args: tokens.collect(),
    })
}
