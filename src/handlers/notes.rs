use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
    Json,
};

use crate::{
    error::Result,
    handlers::auth::MessageResponse,
    models::{note::NewNote, session::Session},
    services::notes as note_service,
    state::AppState,
};

/// Lists the caller's notes.
#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response> {
    let notes = note_service::list_notes(&state, &session.username).await;
    Ok((StatusCode::OK, Json(notes)).into_response())
}

/// Creates a note for the caller.
#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    req: std::result::Result<Json<NewNote>, JsonRejection>,
) -> Result<Response> {
    let Json(req) = req?;
    let note = note_service::create_note(&state, &session.username, req).await?;
    Ok((StatusCode::CREATED, Json(note)).into_response())
}

/// Deletes one of the caller's notes.
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(note_id): Path<String>,
) -> Result<Response> {
    note_service::delete_note(&state, &session.username, &note_id).await;
    Ok((StatusCode::OK, Json(MessageResponse::new("Note deleted"))).into_response())
}
