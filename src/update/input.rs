//! Edit controller - turns classified input events into token store transitions
//!
//! Every event mirrors the buffer snapshot into the active token first, then
//! asks the tokenizer whether the buffer now encodes committable tokens.
//! Backspace never commits: deleting back into `boating AND ` must not re-chip it.

use crate::commands::Cmd;
use crate::messages::InputMsg;
use crate::model::{QueryModel, StoreAction, TokenPatch, TokenType};
use crate::suggest::Suggestion;
use crate::tokenizer::{detect_quoted_phrase, sanitize, Detection};

/// Handle an input event from the input surface
pub fn update_input(model: &mut QueryModel, msg: InputMsg) -> Option<Cmd> {
    let query_before = model.query.clone();
    let buffer_before = model.edit.buffer.clone();
    let suggestions_before = model.suggestions.items().len();
    let surface = msg.buffer().map(str::to_string);

    let mut search = None;
    match msg {
        InputMsg::Character { buffer } | InputMsg::Space { buffer } => on_text(model, buffer),
        InputMsg::Backspace { buffer } => on_backspace(model, buffer),
        InputMsg::Enter {
            buffer,
            highlighted,
        } => search = on_enter(model, buffer, highlighted),
        InputMsg::Select(suggestion) => {
            if !on_select(model, suggestion) {
                return None;
            }
        }
    }

    let mut cmds = Vec::new();
    if model.query != query_before || model.suggestions.items().len() != suggestions_before {
        cmds.push(Cmd::Redraw);
    }
    // The surface still shows the snapshot (or, after a selection, the picked value)
    if surface.as_deref() != Some(model.edit.buffer.as_str()) {
        cmds.push(Cmd::SetBuffer(model.edit.buffer.clone()));
    }
    if model.edit.buffer != buffer_before {
        cmds.push(Cmd::BufferChanged {
            sanitized: sanitize(&model.edit.buffer),
            request_id: model.suggestions.next_request(),
            debounce_ms: model.config.suggestion_debounce_ms,
        });
    }
    cmds.extend(search);
    Cmd::from_vec(cmds)
}

/// Character or space typed
fn on_text(model: &mut QueryModel, buffer: String) {
    model.edit.set_buffer(buffer.as_str());

    // Reopened or drafted token edited down to nothing is removed right away
    if buffer.is_empty() {
        remove_active(model);
        return;
    }

    mirror_into_active(model, &buffer);

    let allow_leading = model.query.has_committed_token();
    match model
        .tokenizer
        .detect(&buffer, allow_leading, model.edit.pending_operator)
    {
        Detection::None => {}
        Detection::Deferred => {
            tracing::debug!(buffer = %buffer, "embedded operator deferred until next keystroke");
            model.edit.pending_operator = true;
        }
        Detection::Commit(fragments) => commit_fragments(model, fragments),
    }
}

fn on_backspace(model: &mut QueryModel, buffer: String) {
    model.edit.set_buffer(buffer.as_str());

    match (model.query.active_id(), buffer.is_empty()) {
        (Some(_), false) => {
            model
                .query
                .apply(StoreAction::Update(TokenPatch::value(buffer)));
        }
        (Some(_), true) => remove_active(model),
        (None, true) => reopen_last(model),
        // Text the controller has not seen yet becomes a draft, without committing
        (None, false) => mirror_into_active(model, &buffer),
    }
}

/// Returns a search command when Enter means "run the query"
fn on_enter(model: &mut QueryModel, buffer: String, highlighted: bool) -> Option<Cmd> {
    if highlighted {
        // A Select follows for the highlighted entry
        tracing::trace!("enter with highlighted suggestion, deferring to selection");
        return None;
    }

    model.edit.set_buffer(buffer.as_str());

    if model.query.active_id().is_some() && model.query.len() > 1 {
        let value = finalized_value(&buffer);
        if value.is_empty() {
            remove_active(model);
        } else {
            let kind = model.tokenizer.classify(&value);
            tracing::debug!(value = %value, kind = %kind, "enter commits active token");
            model
                .query
                .apply(StoreAction::Update(TokenPatch::commit(value, kind)));
            finish_commit(model);
        }
        return None;
    }

    let query = model.query.to_query_string();
    tracing::info!(query = %query, "running search");
    Some(Cmd::RunSearch {
        query,
        tokens: model.query.tokens().to_vec(),
    })
}

/// Returns false when the selection carried nothing usable
fn on_select(model: &mut QueryModel, suggestion: Suggestion) -> bool {
    let value = suggestion.value.trim();
    if value.is_empty() {
        tracing::debug!("ignoring selection without a value");
        return false;
    }

    // Logic membership always comes from the vocabulary
    let kind = model.tokenizer.classify(value);
    if suggestion.kind.is_committed() && suggestion.kind != kind {
        tracing::debug!(
            value = %value,
            declared = %suggestion.kind,
            kind = %kind,
            "selection type reclassified"
        );
    }

    if model.query.active_id().is_some() {
        model
            .query
            .apply(StoreAction::Update(TokenPatch::commit(value, kind)));
    } else {
        model.query.apply(StoreAction::add(value, kind));
    }
    finish_commit(model);
    true
}

/// First fragment lands in the active token, the rest are appended in order
fn commit_fragments(model: &mut QueryModel, fragments: Vec<String>) {
    tracing::debug!(?fragments, "committing tokens");

    let mut fragments = fragments.into_iter();
    if model.query.active_id().is_some() {
        if let Some(first) = fragments.next() {
            let kind = model.tokenizer.classify(&first);
            model
                .query
                .apply(StoreAction::Update(TokenPatch::commit(first, kind)));
        }
    }
    for fragment in fragments {
        let kind = model.tokenizer.classify(&fragment);
        model.query.apply(StoreAction::add(fragment, kind));
    }
    finish_commit(model);
}

fn finish_commit(model: &mut QueryModel) {
    model.query.apply(StoreAction::SetActive(None));
    model.edit.clear();
    model.suggestions.clear();
}

/// Keep the live token in sync with the buffer, drafting one if needed
fn mirror_into_active(model: &mut QueryModel, buffer: &str) {
    if model.query.active_id().is_some() {
        model
            .query
            .apply(StoreAction::Update(TokenPatch::value(buffer)));
    } else {
        model
            .query
            .apply(StoreAction::add_active(buffer, TokenType::Text));
        model.edit.reopened = false;
    }
}

fn remove_active(model: &mut QueryModel) {
    if let Some(id) = model.query.active_id() {
        tracing::debug!(%id, "active token emptied, removing");
        model.query.apply(StoreAction::Remove(Some(id)));
    }
    model.edit.clear();
}

/// Hand the last token back to the input surface for editing
fn reopen_last(model: &mut QueryModel) {
    let Some(last) = model.query.last().cloned() else {
        return;
    };
    tracing::debug!(id = %last.id, value = %last.value, "reopening last token");

    model.query.apply(StoreAction::SetActive(Some(last.id)));
    model
        .query
        .apply(StoreAction::Update(TokenPatch::kind(TokenType::Text)));
    model.edit.set_buffer(last.value);
    model.edit.pending_operator = false;
    model.edit.reopened = true;
}

/// Value committed by Enter: a quoted buffer loses its quotes
fn finalized_value(buffer: &str) -> String {
    detect_quoted_phrase(buffer)
        .and_then(|mut fragments| fragments.pop())
        .unwrap_or_else(|| buffer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EditMode;

    fn type_str(model: &mut QueryModel, text: &str) {
        let mut buffer = model.buffer().to_string();
        for ch in text.chars() {
            buffer.push(ch);
            update_input(model, InputMsg::typed(ch, buffer.clone()));
            buffer = model.buffer().to_string();
        }
    }

    #[test]
    fn test_first_character_starts_draft() {
        let mut model = QueryModel::default();
        let cmd = update_input(&mut model, InputMsg::typed('b', "b"));

        assert_eq!(model.mode(), EditMode::Drafting);
        assert_eq!(model.tokens().len(), 1);
        assert_eq!(model.tokens()[0].kind, TokenType::Text);
        assert_eq!(model.tokens()[0].value, "b");

        let cmds = cmd.map(Cmd::into_vec).unwrap_or_default();
        assert!(cmds.contains(&Cmd::Redraw));
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Cmd::BufferChanged { sanitized, .. } if sanitized == "b")));
        assert!(!cmds.iter().any(|c| matches!(c, Cmd::SetBuffer(_))));
    }

    #[test]
    fn test_commit_clears_surface() {
        let mut model = QueryModel::default();
        type_str(&mut model, "boating AND");
        let cmd = update_input(&mut model, InputMsg::typed(' ', "boating AND "));
        let cmds = cmd.map(Cmd::into_vec).unwrap_or_default();
        assert!(cmds.contains(&Cmd::SetBuffer(String::new())));
        assert_eq!(model.buffer(), "");
    }

    #[test]
    fn test_backspace_does_not_commit() {
        let mut model = QueryModel::default();
        type_str(&mut model, "boating ANDx");
        // Space inserted before the x: embedded shape, deferred
        update_input(&mut model, InputMsg::typed(' ', "boating AND x"));
        assert!(model.pending_operator());

        update_input(&mut model, InputMsg::backspace("boating AND "));
        assert_eq!(model.tokens().len(), 1);
        assert_eq!(model.tokens()[0].kind, TokenType::Text);
        assert_eq!(model.tokens()[0].value, "boating AND ");
    }

    #[test]
    fn test_finalized_value_strips_quotes() {
        assert_eq!(finalized_value(r#""sea kayak""#), "sea kayak");
        assert_eq!(finalized_value(" boating "), "boating");
    }
}
