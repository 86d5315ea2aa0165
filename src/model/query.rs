//! Query state - the ordered token sequence and its edit cursor
//!
//! All mutation goes through [`StoreAction`], applied by [`QueryState::apply`].
//! Every transition is total: stale ids and missing active tokens are no-ops.

use serde::Serialize;

use super::token::{Token, TokenId, TokenPatch, TokenType};

/// The closed set of token store transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Append a token with a fresh id, optionally making it the active token
    Add {
        value: String,
        kind: TokenType,
        activate: bool,
    },
    /// Merge fields into the active token
    Update(TokenPatch),
    /// Remove the given token, or the active token when `None`; always clears `active`
    Remove(Option<TokenId>),
    /// Point the edit cursor at a token, or clear it
    SetActive(Option<TokenId>),
}

impl StoreAction {
    pub fn add(value: impl Into<String>, kind: TokenType) -> Self {
        StoreAction::Add {
            value: value.into(),
            kind,
            activate: false,
        }
    }

    pub fn add_active(value: impl Into<String>, kind: TokenType) -> Self {
        StoreAction::Add {
            value: value.into(),
            kind,
            activate: true,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::Add { .. } => "Add",
            StoreAction::Update(_) => "Update",
            StoreAction::Remove(_) => "Remove",
            StoreAction::SetActive(_) => "SetActive",
        }
    }
}

/// Ordered tokens plus the single active (editable) token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    tokens: Vec<Token>,
    #[serde(rename = "activeId")]
    active: Option<TokenId>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Apply a transition in place
    pub fn apply(&mut self, action: StoreAction) {
        tracing::trace!(action = action.name(), active = ?self.active, "store transition");
        match action {
            StoreAction::Add {
                value,
                kind,
                activate,
            } => {
                let id = self.next_token_id();
                self.tokens.push(Token::new(id, value, kind));
                if activate {
                    self.active = Some(id);
                }
            }
            StoreAction::Update(patch) => {
                let Some(active) = self.active else {
                    return;
                };
                // Stale pointer: leave the state untouched
                if let Some(token) = self.tokens.iter_mut().find(|t| t.id == active) {
                    patch.apply_to(token);
                }
            }
            StoreAction::Remove(id) => {
                if let Some(target) = id.or(self.active) {
                    self.tokens.retain(|t| t.id != target);
                }
                self.active = None;
            }
            StoreAction::SetActive(id) => {
                self.active = id.filter(|id| self.contains(*id));
            }
        }
    }

    /// Apply a transition to an owned state, returning the new state
    pub fn reduce(mut self, action: StoreAction) -> Self {
        self.apply(action);
        self
    }

    fn next_token_id(&mut self) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn active_id(&self) -> Option<TokenId> {
        self.active
    }

    /// Position of the active token in the sequence
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active?;
        self.tokens.iter().position(|t| t.id == active)
    }

    pub fn active_token(&self) -> Option<&Token> {
        let active = self.active?;
        self.tokens.iter().find(|t| t.id == active)
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.iter().any(|t| t.id == id)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Whether any token other than the live one exists
    pub fn has_committed_token(&self) -> bool {
        self.tokens.iter().any(|t| Some(t.id) != self.active)
    }

    /// Render the query as a single line, re-quoting multi-word phrases
    pub fn to_query_string(&self) -> String {
        self.tokens
            .iter()
            .map(|t| {
                if t.kind == TokenType::Phrase && t.value.contains(char::is_whitespace) {
                    format!("\"{}\"", t.value)
                } else {
                    t.value.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize the query model (`{"tokens": [...], "activeId": ...}`)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Assert store invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        if let Some(active) = self.active {
            debug_assert!(
                self.contains(active),
                "Active token {} must exist in the sequence",
                active
            );
        }
        for (i, token) in self.tokens.iter().enumerate() {
            debug_assert!(
                token.id.0 < self.next_id,
                "Token id {} was never issued",
                token.id
            );
            debug_assert!(
                self.tokens[i + 1..].iter().all(|t| t.id != token.id),
                "Token id {} appears twice",
                token.id
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(values: &[(&str, TokenType)]) -> QueryState {
        values.iter().fold(QueryState::new(), |state, (value, kind)| {
            state.reduce(StoreAction::add(*value, *kind))
        })
    }

    #[test]
    fn test_add_appends_without_activating() {
        let state = state_with(&[("boating", TokenType::Phrase), ("AND", TokenType::Logic)]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.tokens()[0].value, "boating");
        assert_eq!(state.tokens()[1].value, "AND");
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn test_add_active_sets_cursor() {
        let state = QueryState::new().reduce(StoreAction::add_active("b", TokenType::Text));
        assert_eq!(state.active_id(), Some(state.tokens()[0].id));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_update_without_active_is_noop() {
        let state = state_with(&[("boating", TokenType::Phrase)]);
        let after = state
            .clone()
            .reduce(StoreAction::Update(TokenPatch::value("x")));
        assert_eq!(after, state);
    }

    #[test]
    fn test_update_merges_into_active_only() {
        let mut state = state_with(&[("boating", TokenType::Phrase)]);
        state.apply(StoreAction::add_active("tour", TokenType::Text));
        state.apply(StoreAction::Update(TokenPatch::commit(
            "tourism",
            TokenType::Phrase,
        )));
        assert_eq!(state.tokens()[0].value, "boating");
        assert_eq!(state.tokens()[1].value, "tourism");
        assert_eq!(state.tokens()[1].kind, TokenType::Phrase);
    }

    #[test]
    fn test_remove_implicit_targets_active_and_clears_cursor() {
        let mut state = state_with(&[("boating", TokenType::Phrase)]);
        state.apply(StoreAction::add_active("x", TokenType::Text));
        state.apply(StoreAction::Remove(None));
        assert_eq!(state.len(), 1);
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn test_remove_unknown_id_only_clears_cursor() {
        let mut state = state_with(&[("boating", TokenType::Phrase)]);
        state.apply(StoreAction::Remove(Some(TokenId(99))));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_set_active_ignores_unknown_id() {
        let mut state = state_with(&[("boating", TokenType::Phrase)]);
        state.apply(StoreAction::SetActive(Some(TokenId(42))));
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut state = state_with(&[("a", TokenType::Phrase)]);
        let first = state.tokens()[0].id;
        state.apply(StoreAction::Remove(Some(first)));
        state.apply(StoreAction::add("b", TokenType::Phrase));
        assert_ne!(state.tokens()[0].id, first);
    }

    #[test]
    fn test_has_committed_token_excludes_live_token() {
        let mut state = QueryState::new();
        assert!(!state.has_committed_token());
        state.apply(StoreAction::add_active("bo", TokenType::Text));
        assert!(!state.has_committed_token());
        state.apply(StoreAction::SetActive(None));
        assert!(state.has_committed_token());
    }

    #[test]
    fn test_query_string_requotes_multiword_phrases() {
        let state = state_with(&[
            ("sea kayak", TokenType::Phrase),
            ("OR", TokenType::Logic),
            ("boating", TokenType::Phrase),
        ]);
        assert_eq!(state.to_query_string(), r#""sea kayak" OR boating"#);
    }

    #[test]
    fn test_json_payload_shape() {
        let state = state_with(&[("boating", TokenType::Phrase)]);
        assert_eq!(
            state.to_json().unwrap(),
            r#"{"tokens":[{"id":1,"value":"boating","type":"phrase"}],"activeId":null}"#
        );
    }
}
