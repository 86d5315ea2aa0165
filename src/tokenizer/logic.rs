//! Logic operator vocabulary and operator shape detection
//!
//! Three shapes are recognised, tested in this order:
//!
//! - trailing: `boating AND ` - operator fully typed and followed by a space
//! - embedded: `boating AND tourism` - operator surrounded by more text
//! - leading: `AND ` - operator alone, only when the query already has a token
//!
//! The embedded shape is deferred: the first sighting only reports
//! [`LogicMatch::Deferred`], and the caller must see it again with the
//! pending flag raised before it commits. This keeps `OR` inside a longer
//! word from splitting the buffer prematurely.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::phrase::detect_quoted_phrase;
use crate::model::TokenType;

/// A single operator in the vocabulary, with the text shown next to it in suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicOperator {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LogicOperator {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let description = Some(format!(
            "Add boolean operator \"{}\"",
            value.to_lowercase()
        ));
        Self { value, description }
    }
}

/// Default operator set
pub fn default_operators() -> Vec<LogicOperator> {
    ["AND", "OR", "NOT"]
        .into_iter()
        .map(LogicOperator::new)
        .collect()
}

/// Result of testing a buffer against the operator shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicMatch {
    /// No operator shape found
    NoMatch,
    /// Embedded shape seen for the first time; wait for one more keystroke
    Deferred,
    /// Committable fragments, in query order
    Matched(Vec<String>),
}

/// Errors from building a vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Empty,
    EmptyOperator,
    InvalidOperator(String),
    DuplicateOperator(String),
    Pattern(String),
}

impl std::fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyError::Empty => write!(f, "operator vocabulary is empty"),
            VocabularyError::EmptyOperator => write!(f, "operator must not be empty"),
            VocabularyError::InvalidOperator(op) => write!(
                f,
                "operator {:?} must not contain whitespace or quotes",
                op
            ),
            VocabularyError::DuplicateOperator(op) => write!(f, "duplicate operator {:?}", op),
            VocabularyError::Pattern(e) => write!(f, "operator pattern error: {}", e),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// The configured closed set of logic operators, with compiled shape patterns
#[derive(Debug, Clone)]
pub struct LogicVocabulary {
    operators: Vec<LogicOperator>,
    trailing: Regex,
    embedded: Regex,
    leading: Regex,
}

impl LogicVocabulary {
    pub fn new(operators: Vec<LogicOperator>) -> Result<Self, VocabularyError> {
        if operators.is_empty() {
            return Err(VocabularyError::Empty);
        }
        for (i, op) in operators.iter().enumerate() {
            if op.value.is_empty() {
                return Err(VocabularyError::EmptyOperator);
            }
            if op.value.contains(|c: char| c.is_whitespace() || c == '"') {
                return Err(VocabularyError::InvalidOperator(op.value.clone()));
            }
            if operators[..i].iter().any(|o| o.value == op.value) {
                return Err(VocabularyError::DuplicateOperator(op.value.clone()));
            }
        }

        let alternation = operators
            .iter()
            .map(|op| regex::escape(&op.value))
            .collect::<Vec<_>>()
            .join("|");

        // A word starts with a non-quote, non-space character; quoted buffers never
        // match an operator shape.
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| VocabularyError::Pattern(e.to_string()))
        };
        let trailing = compile(format!(r#"^([^"\s]\S*)\s({alternation})\s$"#))?;
        let embedded = compile(format!(r#"^([^"\s]\S*)\s({alternation})\s(.+)$"#))?;
        let leading = compile(format!(r"^({alternation})\s$"))?;

        Ok(Self {
            operators,
            trailing,
            embedded,
            leading,
        })
    }

    pub fn operators(&self) -> &[LogicOperator] {
        &self.operators
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, value: &str) -> bool {
        self.operators.iter().any(|op| op.value == value)
    }

    /// `Logic` for an exact vocabulary member, `Phrase` otherwise
    pub fn classify(&self, value: &str) -> TokenType {
        if self.contains(value) {
            TokenType::Logic
        } else {
            TokenType::Phrase
        }
    }

    /// Test the buffer against the operator shapes
    ///
    /// Pure: `pending` is the caller's ambiguity flag and is never modified here.
    pub fn detect(&self, buffer: &str, allow_leading: bool, pending: bool) -> LogicMatch {
        if buffer.is_empty() {
            return LogicMatch::NoMatch;
        }

        if let Some(caps) = self.trailing.captures(buffer) {
            return LogicMatch::Matched(fragments(&caps));
        }

        if let Some(caps) = self.embedded.captures(buffer) {
            if !pending {
                return LogicMatch::Deferred;
            }
            return LogicMatch::Matched(fragments(&caps));
        }

        if allow_leading {
            if let Some(caps) = self.leading.captures(buffer) {
                return LogicMatch::Matched(fragments(&caps));
            }
        }

        LogicMatch::NoMatch
    }
}

impl Default for LogicVocabulary {
    fn default() -> Self {
        Self::new(default_operators()).expect("default operators form a valid vocabulary")
    }
}

/// Capture groups as trimmed, non-empty fragments
///
/// A fully quoted embedded rest loses its quotes, as a typed quoted phrase would.
fn fragments(caps: &regex::Captures<'_>) -> Vec<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| match detect_quoted_phrase(s) {
            Some(mut interior) => interior.pop().unwrap_or_default(),
            None => s.to_string(),
        })
        .collect()
}
