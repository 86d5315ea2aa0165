//! Scripted input surface for driving the controller from text
//!
//! A [`Session`] plays the part of the input widget: it owns the visible
//! buffer, types characters one at a time, obeys `SetBuffer`, and answers
//! `BufferChanged` from a [`SuggestionSource`] straight away (no debounce).
//!
//! Directive syntax, one per line:
//!
//! | Line          | Effect                                   |
//! |---------------|------------------------------------------|
//! | `text`        | type `text` character by character       |
//! | `:bs [N]`     | press backspace N times (default 1)      |
//! | `:enter`      | press enter with nothing highlighted     |
//! | `:select N`   | pick the Nth dropdown entry (1-based)    |
//! | `:pick VALUE` | pick an arbitrary phrase value           |
//! | `:delete ID`  | click the delete button on chip `ID`     |
//! | `:quit`       | stop reading                             |

use std::collections::VecDeque;
use std::str::FromStr;

use crate::commands::Cmd;
use crate::messages::{ChipMsg, InputMsg, Msg, SuggestionMsg};
use crate::model::{QueryModel, TokenId};
use crate::suggest::{Suggestion, SuggestionSource};
use crate::update::update;

/// A single parsed directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Type(String),
    Backspace(usize),
    Enter,
    Select(usize),
    Pick(String),
    Delete(TokenId),
    Quit,
}

/// Errors from parsing or running a directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    UnknownDirective(String),
    InvalidArgument { directive: String, argument: String },
    NoSuchSuggestion(usize),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownDirective(d) => write!(f, "Unknown directive: {}", d),
            SessionError::InvalidArgument {
                directive,
                argument,
            } => write!(f, "Invalid argument for {}: {:?}", directive, argument),
            SessionError::NoSuchSuggestion(n) => write!(f, "No suggestion #{}", n),
        }
    }
}

impl std::error::Error for SessionError {}

impl FromStr for ScriptLine {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(directive) = line.strip_prefix(':') else {
            return Ok(ScriptLine::Type(line.to_string()));
        };

        let (name, argument) = match directive.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (directive, ""),
        };

        let invalid = || SessionError::InvalidArgument {
            directive: name.to_string(),
            argument: argument.to_string(),
        };

        match name {
            "bs" | "backspace" => {
                if argument.is_empty() {
                    Ok(ScriptLine::Backspace(1))
                } else {
                    argument
                        .parse()
                        .map(ScriptLine::Backspace)
                        .map_err(|_| invalid())
                }
            }
            "enter" => Ok(ScriptLine::Enter),
            "select" => match argument.parse::<usize>() {
                Ok(n) if n > 0 => Ok(ScriptLine::Select(n)),
                _ => Err(invalid()),
            },
            "pick" if !argument.is_empty() => Ok(ScriptLine::Pick(argument.to_string())),
            "pick" => Err(invalid()),
            "delete" => argument
                .parse()
                .map(|id| ScriptLine::Delete(TokenId(id)))
                .map_err(|_| invalid()),
            "quit" | "q" => Ok(ScriptLine::Quit),
            _ => Err(SessionError::UnknownDirective(name.to_string())),
        }
    }
}

/// Model plus a simulated input surface and suggestion collaborator
pub struct Session {
    model: QueryModel,
    source: Box<dyn SuggestionSource>,
    surface: String,
}

impl Session {
    pub fn new(model: QueryModel, source: Box<dyn SuggestionSource>) -> Self {
        Self {
            model,
            source,
            surface: String::new(),
        }
    }

    pub fn model(&self) -> &QueryModel {
        &self.model
    }

    /// Text currently shown in the simulated input
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Run a directive, returning the commands meant for the outside world
    pub fn run(&mut self, line: &ScriptLine) -> Result<Vec<Cmd>, SessionError> {
        let mut out = Vec::new();
        match line {
            ScriptLine::Type(text) => {
                for ch in text.chars() {
                    self.surface.push(ch);
                    let msg = InputMsg::typed(ch, self.surface.clone());
                    out.extend(self.dispatch(Msg::Input(msg)));
                }
            }
            ScriptLine::Backspace(count) => {
                for _ in 0..*count {
                    self.surface.pop();
                    let msg = InputMsg::backspace(self.surface.clone());
                    out.extend(self.dispatch(Msg::Input(msg)));
                }
            }
            ScriptLine::Enter => {
                let msg = InputMsg::enter(self.surface.clone());
                out.extend(self.dispatch(Msg::Input(msg)));
            }
            ScriptLine::Select(n) => {
                let suggestion = self
                    .model
                    .suggestions()
                    .get(n.wrapping_sub(1))
                    .cloned()
                    .ok_or(SessionError::NoSuchSuggestion(*n))?;
                out.extend(self.dispatch(Msg::Input(InputMsg::Select(suggestion))));
            }
            ScriptLine::Pick(value) => {
                let msg = InputMsg::Select(Suggestion::phrase(value.clone()));
                out.extend(self.dispatch(Msg::Input(msg)));
            }
            ScriptLine::Delete(id) => {
                out.extend(self.dispatch(Msg::Chip(ChipMsg::Delete(*id))));
            }
            ScriptLine::Quit => {}
        }
        Ok(out)
    }

    /// Run a message to quiescence, handling surface and suggestion commands locally
    fn dispatch(&mut self, msg: Msg) -> Vec<Cmd> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let Some(cmd) = update(&mut self.model, msg) else {
                continue;
            };
            for cmd in cmd.into_vec() {
                match cmd {
                    Cmd::SetBuffer(text) => self.surface = text,
                    Cmd::BufferChanged {
                        sanitized,
                        request_id,
                        ..
                    } => {
                        let items = self.source.query(&sanitized);
                        queue.push_back(Msg::Suggestions(SuggestionMsg::Loaded {
                            request_id,
                            items,
                        }));
                    }
                    Cmd::Redraw | Cmd::None => {}
                    other => out.push(other),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directives() {
        assert_eq!(
            "boating AND ".parse::<ScriptLine>().unwrap(),
            ScriptLine::Type("boating AND ".to_string())
        );
        assert_eq!(":bs".parse::<ScriptLine>().unwrap(), ScriptLine::Backspace(1));
        assert_eq!(":bs 3".parse::<ScriptLine>().unwrap(), ScriptLine::Backspace(3));
        assert_eq!(":enter".parse::<ScriptLine>().unwrap(), ScriptLine::Enter);
        assert_eq!(":select 2".parse::<ScriptLine>().unwrap(), ScriptLine::Select(2));
        assert_eq!(
            ":pick sea kayak".parse::<ScriptLine>().unwrap(),
            ScriptLine::Pick("sea kayak".to_string())
        );
        assert_eq!(
            ":delete 4".parse::<ScriptLine>().unwrap(),
            ScriptLine::Delete(TokenId(4))
        );
        assert_eq!(":quit".parse::<ScriptLine>().unwrap(), ScriptLine::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ":frobnicate".parse::<ScriptLine>().unwrap_err(),
            SessionError::UnknownDirective("frobnicate".to_string())
        );
        assert!(":select 0".parse::<ScriptLine>().is_err());
        assert!(":bs many".parse::<ScriptLine>().is_err());
        assert!(":pick".parse::<ScriptLine>().is_err());
    }
}
