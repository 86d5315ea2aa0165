//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Input messages carry
//! the buffer snapshot as it reads after the keystroke was applied.

use crate::model::TokenId;
use crate::suggest::Suggestion;

/// Classified events from the input surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// A printable character was typed
    Character { buffer: String },
    /// The space bar was pressed
    Space { buffer: String },
    /// Backspace was pressed
    Backspace { buffer: String },
    /// Enter was pressed; `highlighted` is set when a dropdown entry is highlighted
    Enter { buffer: String, highlighted: bool },
    /// A suggestion was picked from the dropdown
    Select(Suggestion),
}

impl InputMsg {
    /// Build the event for a typed character, choosing `Space` for whitespace
    pub fn typed(ch: char, buffer: impl Into<String>) -> Self {
        let buffer = buffer.into();
        if ch.is_whitespace() {
            InputMsg::Space { buffer }
        } else {
            InputMsg::Character { buffer }
        }
    }

    pub fn backspace(buffer: impl Into<String>) -> Self {
        InputMsg::Backspace {
            buffer: buffer.into(),
        }
    }

    pub fn enter(buffer: impl Into<String>) -> Self {
        InputMsg::Enter {
            buffer: buffer.into(),
            highlighted: false,
        }
    }

    /// Buffer snapshot carried by the event, if any
    pub fn buffer(&self) -> Option<&str> {
        match self {
            InputMsg::Character { buffer }
            | InputMsg::Space { buffer }
            | InputMsg::Backspace { buffer }
            | InputMsg::Enter { buffer, .. } => Some(buffer),
            InputMsg::Select(_) => None,
        }
    }
}

/// Direct manipulation of rendered chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipMsg {
    /// Delete button on a chip was clicked
    Delete(TokenId),
}

/// Responses from the suggestion collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionMsg {
    /// Results for a request issued by `Cmd::BufferChanged`
    Loaded {
        request_id: u64,
        items: Vec<Suggestion>,
    },
    /// The fetch failed; treated as an empty result
    Failed { request_id: u64, error: String },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Input(InputMsg),
    Chip(ChipMsg),
    Suggestions(SuggestionMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_maps_whitespace_to_space() {
        assert_eq!(
            InputMsg::typed(' ', "boating "),
            InputMsg::Space {
                buffer: "boating ".to_string()
            }
        );
        assert_eq!(
            InputMsg::typed('b', "b"),
            InputMsg::Character {
                buffer: "b".to_string()
            }
        );
    }

    #[test]
    fn test_buffer_accessor() {
        assert_eq!(InputMsg::backspace("boatin").buffer(), Some("boatin"));
        assert_eq!(
            InputMsg::Select(Suggestion::phrase("x")).buffer(),
            None
        );
    }
}
