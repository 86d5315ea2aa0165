//! querybar - Elm-style incremental query builder
//!
//! Typed text is converted, keystroke by keystroke, into an ordered sequence
//! of phrase and boolean operator chips. Any committed chip can be reopened
//! for editing by deleting back into it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod session;
pub mod suggest;
pub mod tokenizer;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::QueryConfig;
pub use messages::{InputMsg, Msg};
pub use model::{QueryModel, Token, TokenId, TokenType};
pub use tokenizer::Tokenizer;
pub use update::update;
