//! Application model - the complete state of the query builder
//!
//! The model is owned exclusively by the caller driving [`crate::update::update`].
//! Renderers read it through the accessors or a [`QuerySnapshot`](crate::tracing::QuerySnapshot).

pub mod edit;
pub mod query;
pub mod token;

pub use edit::{EditMode, EditState};
pub use query::{QueryState, StoreAction};
pub use token::{Token, TokenId, TokenPatch, TokenType};

use crate::commands::Cmd;
use crate::config::{ConfigError, QueryConfig};
use crate::messages::{InputMsg, Msg};
use crate::suggest::{Suggestion, SuggestionState};
use crate::tokenizer::Tokenizer;

/// The complete query builder model
#[derive(Debug, Clone)]
pub struct QueryModel {
    /// Token store
    pub query: QueryState,
    /// Buffer mirror and ambiguity memory
    pub edit: EditState,
    /// Buffer classifier
    pub tokenizer: Tokenizer,
    /// Dropdown contents and request tracking
    pub suggestions: SuggestionState,
    pub config: QueryConfig,
}

impl Default for QueryModel {
    fn default() -> Self {
        Self {
            query: QueryState::new(),
            edit: EditState::new(),
            tokenizer: Tokenizer::default(),
            suggestions: SuggestionState::new(),
            config: QueryConfig::default(),
        }
    }
}

impl QueryModel {
    /// Create an empty model, building the operator vocabulary from `config`
    pub fn new(config: QueryConfig) -> Result<Self, ConfigError> {
        let tokenizer = Tokenizer::new(config.vocabulary()?);
        Ok(Self {
            query: QueryState::new(),
            edit: EditState::new(),
            tokenizer,
            suggestions: SuggestionState::new(),
            config,
        })
    }

    /// Feed one input event through the edit controller
    pub fn handle_input(&mut self, msg: InputMsg) -> Option<Cmd> {
        crate::update::update(self, Msg::Input(msg))
    }

    pub fn tokens(&self) -> &[Token] {
        self.query.tokens()
    }

    pub fn active_id(&self) -> Option<TokenId> {
        self.query.active_id()
    }

    pub fn active_token(&self) -> Option<&Token> {
        self.query.active_token()
    }

    /// Gate for the leading-operator shape
    pub fn has_committed_token(&self) -> bool {
        self.query.has_committed_token()
    }

    pub fn buffer(&self) -> &str {
        &self.edit.buffer
    }

    pub fn pending_operator(&self) -> bool {
        self.edit.pending_operator
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.suggestions.items()
    }

    pub fn mode(&self) -> EditMode {
        match self.query.active_id() {
            None => EditMode::Idle,
            Some(_) if self.edit.reopened => EditMode::ReEditing,
            Some(_) => EditMode::Drafting,
        }
    }
}
