//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod chip;
mod input;
mod suggestions;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::QueryModel;

#[cfg(debug_assertions)]
use crate::tracing::QuerySnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use chip::update_chip;
pub use input::update_input;
pub use suggestions::update_suggestions;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut QueryModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut QueryModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Input(m) => input::update_input(model, m),
        Msg::Chip(m) => chip::update_chip(model, m),
        Msg::Suggestions(m) => suggestions::update_suggestions(model, m),
    }
}

/// Update with span, before/after snapshot diff, and invariant checks
#[cfg(debug_assertions)]
fn update_traced(model: &mut QueryModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = QuerySnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = QuerySnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "query", %diff, "state changed");
    }

    model.query.assert_invariants();
    debug_assert!(
        model
            .query
            .tokens()
            .iter()
            .filter(|t| t.kind == crate::model::TokenType::Logic)
            .all(|t| model.tokenizer.vocabulary().contains(&t.value)),
        "Logic tokens must belong to the vocabulary (after {})",
        msg_name
    );

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Input::Character { buffer: "b" }`
/// - `Chip::Delete(TokenId(3))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Chip(m) => format!("Chip::{:?}", m),
        Msg::Suggestions(m) => match m {
            crate::messages::SuggestionMsg::Loaded { request_id, items } => {
                format!("Suggestions::Loaded(#{}, {} items)", request_id, items.len())
            }
            crate::messages::SuggestionMsg::Failed { request_id, .. } => {
                format!("Suggestions::Failed(#{})", request_id)
            }
        },
    }
}
