//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use querybar::commands::Cmd;
use querybar::messages::{InputMsg, Msg};
use querybar::model::{QueryModel, TokenType};
use querybar::session::Session;
use querybar::suggest::{StaticSuggestions, Suggestion};
use querybar::update::update;

/// Type `text` one character at a time, feeding each snapshot to the controller
///
/// The surface is assumed to show exactly what the controller last mirrored,
/// which holds because every divergence is answered with `Cmd::SetBuffer`.
pub fn type_text(model: &mut QueryModel, text: &str) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    for ch in text.chars() {
        let mut buffer = model.buffer().to_string();
        buffer.push(ch);
        cmds.extend(send(model, InputMsg::typed(ch, buffer)));
    }
    cmds
}

/// Press backspace `count` times against the mirrored buffer
pub fn backspace(model: &mut QueryModel, count: usize) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    for _ in 0..count {
        let mut buffer = model.buffer().to_string();
        buffer.pop();
        cmds.extend(send(model, InputMsg::backspace(buffer)));
    }
    cmds
}

/// Press enter with nothing highlighted
pub fn enter(model: &mut QueryModel) -> Vec<Cmd> {
    let buffer = model.buffer().to_string();
    send(model, InputMsg::enter(buffer))
}

/// Send one input message and flatten the resulting commands
pub fn send(model: &mut QueryModel, msg: InputMsg) -> Vec<Cmd> {
    update(model, Msg::Input(msg))
        .map(Cmd::into_vec)
        .unwrap_or_default()
}

/// Token values in order
pub fn values(model: &QueryModel) -> Vec<String> {
    model.tokens().iter().map(|t| t.value.clone()).collect()
}

/// Token types in order
pub fn kinds(model: &QueryModel) -> Vec<TokenType> {
    model.tokens().iter().map(|t| t.kind).collect()
}

/// Model whose committed tokens are `boating AND`, with an empty buffer
pub fn boating_and() -> QueryModel {
    let mut model = QueryModel::default();
    type_text(&mut model, "boating AND ");
    model
}

/// The `RunSearch` query among `cmds`, if any
pub fn search_query(cmds: &[Cmd]) -> Option<&str> {
    cmds.iter().find_map(|c| match c {
        Cmd::RunSearch { query, .. } => Some(query.as_str()),
        _ => None,
    })
}

/// Small subject list for suggestion tests
pub fn subjects() -> StaticSuggestions {
    StaticSuggestions::new(vec![
        Suggestion::phrase("boating"),
        Suggestion::phrase("boat racing"),
        Suggestion::phrase("tourism"),
        Suggestion::phrase("Oregon"),
    ])
}

/// Session over a default model and [`subjects`]
pub fn test_session() -> Session {
    Session::new(QueryModel::default(), Box::new(subjects()))
}
