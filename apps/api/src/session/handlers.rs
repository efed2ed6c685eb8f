use std::time::Instant;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::ExtractionPayload;
use crate::session::progress::ProgressSnapshot;
use crate::session::{Phase, EXTRACTION_FAILED_MESSAGE};
use crate::state::AppState;
use crate::upload;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create();
    info!("session {session_id} created");
    (StatusCode::CREATED, Json(SessionCreatedResponse { session_id }))
}

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub phase: Phase,
    pub error: Option<String>,
    pub progress: ProgressSnapshot,
    pub created_at: DateTime<Utc>,
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let now = Instant::now();
    state.sessions.with_session(id, |session| {
        Ok(Json(SessionSnapshot {
            session_id: session.id,
            phase: session.phase,
            error: session.error.clone(),
            progress: session.progress(now),
            created_at: session.created_at,
        }))
    })
}

#[derive(Deserialize)]
pub struct TextUploadRequest {
    pub raw_text: String,
}

/// POST /api/v1/sessions/:id/upload/text
pub async fn handle_upload_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TextUploadRequest>,
) -> Result<StatusCode, AppError> {
    let payload = upload::text_payload(&req.raw_text)?;
    submit(state, id, payload)
}

/// POST /api/v1/sessions/:id/upload
pub async fn handle_upload_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<StatusCode, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read the uploaded file: {e}")))?
        .ok_or_else(|| AppError::Validation("No file part in the upload".to_string()))?;

    let media_type = field.content_type().unwrap_or_default().to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read the uploaded file: {e}")))?;

    let payload = upload::document_payload(&data, &media_type)?;
    submit(state, id, payload)
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.with_session(id, |session| session.reset())?;
    info!("session {id} reset");
    Ok(StatusCode::NO_CONTENT)
}

/// Moves the session into `parsing` and spawns the single extraction task.
/// The phase transition happens first, so a second submit races against a
/// conflict, never against a duplicate extraction.
fn submit(
    state: AppState,
    session_id: Uuid,
    payload: ExtractionPayload,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .with_session(session_id, |session| session.begin_parsing(Instant::now()))?;

    let sessions = state.sessions.clone();
    let extractor = state.extractor.clone();
    tokio::spawn(async move {
        let result = extractor.extract(payload).await;
        let recorded = sessions.with_session(session_id, |session| {
            match result {
                Ok(document) => session.complete_parsing(document),
                Err(e) => {
                    error!("extraction failed for session {session_id}: {e}");
                    session.fail_parsing(EXTRACTION_FAILED_MESSAGE);
                }
            }
            Ok(())
        });
        if let Err(e) = recorded {
            error!("could not record extraction outcome for session {session_id}: {e}");
        }
    });

    Ok(StatusCode::ACCEPTED)
}
