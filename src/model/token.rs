//! Token types - the chips that make up a query

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a token
///
/// Ids come from a monotonic counter owned by [`super::QueryState`] and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a token represents in the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// The live token mirroring the input buffer (draft or reopened chip)
    Text,
    /// A committed free-text or quoted term
    Phrase,
    /// A boolean connective from the configured vocabulary
    Logic,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Text => "text",
            TokenType::Phrase => "phrase",
            TokenType::Logic => "logic",
        }
    }

    /// Whether this type is a committed (non-live) type
    #[inline]
    pub fn is_committed(self) -> bool {
        !matches!(self, TokenType::Text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chip in the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenType,
}

impl Token {
    pub fn new(id: TokenId, value: impl Into<String>, kind: TokenType) -> Self {
        Self {
            id,
            value: value.into(),
            kind,
        }
    }

    /// Logic chips have no delete affordance; everything else can be removed directly
    pub fn is_deletable(&self) -> bool {
        self.kind != TokenType::Logic
    }
}

/// Partial token fields merged into the active token by `StoreAction::Update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPatch {
    pub value: Option<String>,
    pub kind: Option<TokenType>,
}

impl TokenPatch {
    /// Patch only the value
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            kind: None,
        }
    }

    /// Patch only the type
    pub fn kind(kind: TokenType) -> Self {
        Self {
            value: None,
            kind: Some(kind),
        }
    }

    /// Patch value and type together (a commit)
    pub fn commit(value: impl Into<String>, kind: TokenType) -> Self {
        Self {
            value: Some(value.into()),
            kind: Some(kind),
        }
    }

    pub(crate) fn apply_to(self, token: &mut Token) {
        if let Some(value) = self.value {
            token.value = value;
        }
        if let Some(kind) = self.kind {
            token.kind = kind;
        }
    }
}
