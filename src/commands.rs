//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the input surface, renderer, and
//! suggestion fetcher should perform after an update.

use crate::model::Token;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Chips or the dropdown changed
    Redraw,
    /// Replace the input surface text (cleared after a commit, or handed back on reopen)
    SetBuffer(String),
    /// The buffer changed; debounce, then fetch suggestions for `sanitized`
    ///
    /// Answer with `Msg::Suggestions` carrying the same `request_id`. Older
    /// requests are superseded and their responses are dropped.
    BufferChanged {
        sanitized: String,
        request_id: u64,
        debounce_ms: u64,
    },
    /// Enter with no editing context: run the query
    RunSearch { query: String, tokens: Vec<Token> },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list of commands: nothing, a single command, or a batch
    pub fn from_vec(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        cmds.retain(|c| *c != Cmd::None);
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
