//! Incremental tokenizer - classifies a raw input buffer
//!
//! The tokenizer never mutates anything. Given a buffer, whether a leading
//! operator is allowed, and the controller's ambiguity flag, it reports
//! whether the buffer now encodes committable tokens.
//!
//! # Example
//!
//! ```
//! use querybar::tokenizer::{Detection, Tokenizer};
//!
//! let tokenizer = Tokenizer::default();
//! assert_eq!(
//!     tokenizer.detect("boating AND ", false, false),
//!     Detection::Commit(vec!["boating".into(), "AND".into()])
//! );
//! assert_eq!(tokenizer.detect("boating OR tourism", false, false), Detection::Deferred);
//! ```

mod logic;
mod phrase;

pub use logic::{default_operators, LogicMatch, LogicOperator, LogicVocabulary, VocabularyError};
pub use phrase::{detect_quoted_phrase, is_quoted_term, sanitize};

use crate::model::TokenType;

/// What the tokenizer found in a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Plain text, keep drafting
    None,
    /// Embedded operator seen for the first time; raise the ambiguity flag
    Deferred,
    /// Fragments to commit, in query order
    Commit(Vec<String>),
}

/// Buffer classifier bound to an operator vocabulary
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    vocabulary: LogicVocabulary,
}

impl Tokenizer {
    pub fn new(vocabulary: LogicVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &LogicVocabulary {
        &self.vocabulary
    }

    /// Operator shapes first, then a fully quoted phrase
    pub fn detect(&self, buffer: &str, allow_leading: bool, pending: bool) -> Detection {
        match self.detect_logic_operator(buffer, allow_leading, pending) {
            LogicMatch::Matched(fragments) => Detection::Commit(fragments),
            LogicMatch::Deferred => Detection::Deferred,
            LogicMatch::NoMatch => match detect_quoted_phrase(buffer) {
                Some(fragments) => Detection::Commit(fragments),
                None => Detection::None,
            },
        }
    }

    pub fn detect_logic_operator(
        &self,
        buffer: &str,
        allow_leading: bool,
        pending: bool,
    ) -> LogicMatch {
        self.vocabulary.detect(buffer, allow_leading, pending)
    }

    pub fn detect_quoted_phrase(&self, buffer: &str) -> Option<Vec<String>> {
        detect_quoted_phrase(buffer)
    }

    pub fn classify(&self, value: &str) -> TokenType {
        self.vocabulary.classify(value)
    }
}
