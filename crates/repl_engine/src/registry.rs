//! The closed set of REPL commands.
//!
//! Adding a command means adding a [`CommandKind`] variant, its descriptor, and its handler arm
//! in the dispatcher's exhaustive match. Nothing else needs to change.

use repl_contract::CommandDescriptor;

static MODE: CommandDescriptor = CommandDescriptor {
    keyword: "mode",
    arg_counts: &[1],
    usage: "mode <brief OR verbose>",
    summary: "Switch the transcript between brief and verbose display.",
};

static LOAD_FILE: CommandDescriptor = CommandDescriptor {
    keyword: "load_file",
    arg_counts: &[1],
    usage: "load_file <csv-file-path>",
    summary: "Load a dataset, replacing the current one on success.",
};

static VIEW: CommandDescriptor = CommandDescriptor {
    keyword: "view",
    arg_counts: &[0],
    usage: "view",
    summary: "Show every row of the loaded dataset.",
};

static SEARCH: CommandDescriptor = CommandDescriptor {
    keyword: "search",
    arg_counts: &[2],
    usage: "search <column> <value>",
    summary: "Show rows whose column (index or header name) equals the value.",
};

/// Registered command identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `mode <brief|verbose>`
    Mode,
    /// `load_file <identifier>`
    LoadFile,
    /// `view`
    View,
    /// `search <column> <value>`
    Search,
}

impl CommandKind {
    /// Every registered command, in help order.
    pub const ALL: [CommandKind; 4] = [Self::Mode, Self::LoadFile, Self::View, Self::Search];

    /// Registration metadata for this command.
    pub fn descriptor(self) -> &'static CommandDescriptor {
        match self {
            Self::Mode => &MODE,
            Self::LoadFile => &LOAD_FILE,
            Self::View => &VIEW,
            Self::Search => &SEARCH,
        }
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn resolve(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.descriptor().keyword == keyword)
    }
}

/// Descriptors for every registered command.
pub fn descriptors() -> impl Iterator<Item = &'static CommandDescriptor> {
    CommandKind::ALL.into_iter().map(CommandKind::descriptor)
}
