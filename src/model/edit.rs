//! Edit controller state - the mirrored input buffer and ambiguity memory

/// Which conceptual mode the controller is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// No active token, waiting for the first character
    Idle,
    /// Composing a new, not yet classified token
    Drafting,
    /// A committed token was reopened by deleting back into it
    ReEditing,
}

/// State owned by the edit controller, advanced only by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    /// Last known contents of the input surface
    pub buffer: String,
    /// An embedded operator shape was seen once for this buffer and awaits confirmation
    pub pending_operator: bool,
    /// The active token was reopened rather than drafted
    pub reopened: bool,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror a new buffer snapshot; an emptied buffer drops the ambiguity flag
    pub fn set_buffer(&mut self, buffer: impl Into<String>) {
        self.buffer = buffer.into();
        if self.buffer.is_empty() {
            self.pending_operator = false;
        }
    }

    /// Reset after a commit or removal
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pending_operator = false;
        self.reopened = false;
    }
}
