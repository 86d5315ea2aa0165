//! Suggestion response handlers
//!
//! Responses may arrive after several more keystrokes. Only the newest
//! request's response is applied; anything older is dropped.

use crate::commands::Cmd;
use crate::messages::SuggestionMsg;
use crate::model::QueryModel;
use crate::suggest::aggregate;
use crate::tokenizer::sanitize;

pub fn update_suggestions(model: &mut QueryModel, msg: SuggestionMsg) -> Option<Cmd> {
    let (request_id, items) = match msg {
        SuggestionMsg::Loaded { request_id, items } => (request_id, items),
        SuggestionMsg::Failed { request_id, error } => {
            tracing::warn!(request_id, %error, "suggestion fetch failed");
            (request_id, Vec::new())
        }
    };

    if !model.suggestions.is_current(request_id) {
        tracing::debug!(
            "Discarding stale suggestions: request {} != latest {}",
            request_id,
            model.suggestions.latest_request()
        );
        return None;
    }

    let input = sanitize(&model.edit.buffer);
    let items = aggregate(
        model.tokenizer.vocabulary(),
        &input,
        items,
        model.config.suggestion_limit,
    );
    tracing::trace!(count = items.len(), "applied suggestions");
    model.suggestions.set_items(items);
    Some(Cmd::Redraw)
}
