//! Suggestion candidates for the dropdown
//!
//! Fetching is a collaborator concern. The core only tracks which request is
//! newest, drops stale responses, and prepends matching logic operators to
//! whatever the source returned.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::TokenType;
use crate::tokenizer::LogicVocabulary;

/// A candidate completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_kind() -> TokenType {
    TokenType::Phrase
}

impl Suggestion {
    pub fn phrase(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TokenType::Phrase,
            description: None,
        }
    }

    pub fn logic(value: impl Into<String>, description: Option<String>) -> Self {
        Self {
            value: value.into(),
            kind: TokenType::Logic,
            description,
        }
    }
}

/// Anything that answers a text query with candidate suggestions
pub trait SuggestionSource {
    fn query(&self, input: &str) -> Vec<Suggestion>;
}

/// Errors from loading a suggestion list
#[derive(Debug, Clone)]
pub enum SuggestionError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionError::Io(e) => write!(f, "IO error: {}", e),
            SuggestionError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SuggestionError {}

/// In-memory suggestion list answering case-insensitive prefix queries
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestions {
    entries: Vec<Suggestion>,
}

impl StaticSuggestions {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self { entries }
    }

    /// Load a list from a `.json` file, or YAML for any other extension
    pub fn load(path: &Path) -> Result<Self, SuggestionError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SuggestionError::Io(e.to_string()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let entries: Vec<Suggestion> = if is_json {
            serde_json::from_str(&content).map_err(|e| SuggestionError::Parse(e.to_string()))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| SuggestionError::Parse(e.to_string()))?
        };

        tracing::debug!("Loaded {} suggestions from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SuggestionSource for StaticSuggestions {
    fn query(&self, input: &str) -> Vec<Suggestion> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|s| s.value.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }
}

/// Logic operators whose value contains the (sanitized) input, case-insensitively
pub fn logic_candidates(vocabulary: &LogicVocabulary, input: &str) -> Vec<Suggestion> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    vocabulary
        .operators()
        .iter()
        .filter(|op| op.value.to_lowercase().contains(&needle))
        .map(|op| Suggestion::logic(op.value.clone(), op.description.clone()))
        .collect()
}

/// Logic candidates first, then the source's results, capped at `limit`
pub fn aggregate(
    vocabulary: &LogicVocabulary,
    input: &str,
    remote: Vec<Suggestion>,
    limit: usize,
) -> Vec<Suggestion> {
    let mut items = logic_candidates(vocabulary, input);
    items.extend(remote.into_iter().filter(|s| !s.value.trim().is_empty()));
    items.truncate(limit);
    items
}

/// Dropdown contents plus the id of the newest outstanding request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    items: Vec<Suggestion>,
    latest_request: u64,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id, superseding every earlier one
    pub fn next_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest_request
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Suggestion>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
