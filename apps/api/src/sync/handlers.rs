use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::Phase;
use crate::state::AppState;
use crate::sync::{card_groups, card_text, links, CardGroup};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBoard {
    pub profile_url: &'static str,
    pub groups: Vec<CardGroup>,
}

/// GET /api/v1/sessions/:id/cards
pub async fn handle_get_cards(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CardBoard>, AppError> {
    let now = Instant::now();
    state.sessions.with_session(id, |session| {
        if session.phase != Phase::Sync {
            return Err(AppError::Conflict(
                "Confirm the reviewed document before syncing".to_string(),
            ));
        }
        let groups = card_groups(session.require_document()?, session.copied_field(now));
        Ok(Json(CardBoard {
            profile_url: links::PROFILE,
            groups,
        }))
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    pub field_id: String,
    /// Exact clipboard payload; `None` when the card was empty (no-op).
    pub text: Option<String>,
    pub copied: bool,
}

/// POST /api/v1/sessions/:id/cards/:field_id/copy
/// Copy of an empty card is a no-op: no clipboard payload, no copied state.
pub async fn handle_copy_card(
    State(state): State<AppState>,
    Path((id, field_id)): Path<(Uuid, String)>,
) -> Result<Json<CopyResponse>, AppError> {
    let now = Instant::now();
    state.sessions.with_session(id, |session| {
        if session.phase != Phase::Sync {
            return Err(AppError::Conflict(
                "Confirm the reviewed document before syncing".to_string(),
            ));
        }
        let text = card_text(session.require_document()?, &field_id)
            .ok_or_else(|| AppError::NotFound(format!("No card with id '{field_id}'")))?;

        if text.is_empty() {
            return Ok(Json(CopyResponse {
                field_id: field_id.clone(),
                text: None,
                copied: false,
            }));
        }

        session.mark_copied(&field_id, now);
        Ok(Json(CopyResponse {
            field_id: field_id.clone(),
            text: Some(text),
            copied: true,
        }))
    })
}
