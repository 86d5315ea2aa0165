//! Chip message handlers (direct deletion from the rendered chip)

use crate::commands::Cmd;
use crate::messages::ChipMsg;
use crate::model::{QueryModel, StoreAction};

pub fn update_chip(model: &mut QueryModel, msg: ChipMsg) -> Option<Cmd> {
    match msg {
        ChipMsg::Delete(id) => {
            let Some(token) = model.query.get(id) else {
                tracing::debug!(%id, "delete for unknown token ignored");
                return None;
            };
            if !token.is_deletable() {
                tracing::debug!(%id, "logic chips have no delete affordance");
                return None;
            }

            let active = model.query.active_id();
            model.query.apply(StoreAction::Remove(Some(id)));

            if active == Some(id) {
                // The draft's pending request is superseded along with its text
                model.edit.clear();
                model.suggestions.clear();
                return Cmd::from_vec(vec![
                    Cmd::Redraw,
                    Cmd::SetBuffer(String::new()),
                    Cmd::BufferChanged {
                        sanitized: String::new(),
                        request_id: model.suggestions.next_request(),
                        debounce_ms: model.config.suggestion_debounce_ms,
                    },
                ]);
            }

            // Remove always drops the cursor; a draft elsewhere stays live
            model.query.apply(StoreAction::SetActive(active));
            Some(Cmd::Redraw)
        }
    }
}
