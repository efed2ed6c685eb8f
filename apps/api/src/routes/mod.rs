pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::editor;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::sync::handlers as sync;
use crate::upload;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/upload",
            post(session::handle_upload_file),
        )
        .route(
            "/api/v1/sessions/:id/upload/text",
            post(session::handle_upload_text),
        )
        .route("/api/v1/sessions/:id/editor", get(editor::handle_get_editor))
        .route(
            "/api/v1/sessions/:id/document",
            put(editor::handle_replace_document),
        )
        .route("/api/v1/sessions/:id/confirm", post(editor::handle_confirm))
        .route("/api/v1/sessions/:id/cards", get(sync::handle_get_cards))
        .route(
            "/api/v1/sessions/:id/cards/:field_id/copy",
            post(sync::handle_copy_card),
        )
        .route("/api/v1/sessions/:id/reset", post(session::handle_reset))
        // Room for a full 10 MiB document plus multipart framing; the
        // uploader enforces the user-facing ceiling itself.
        .layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES + 2 * 1024 * 1024))
        .with_state(state)
}
