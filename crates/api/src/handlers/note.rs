//! Handlers for notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeeper_core::types::DbId;
use notekeeper_db::models::note::{CreateNote, UpdateNote};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DeleteResponse;
use crate::services::NoteService;
use crate::state::AppState;

/// POST /note
///
/// Create a note. Categories and tags in the body are referenced by name and
/// created when they do not exist yet.
pub async fn create_note(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let note = NoteService::new(&state).create(&input).await?;

    tracing::info!(
        note_id = note.id,
        categories = note.categories.len(),
        tags = note.tags.len(),
        "Note created",
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /note/{id}
pub async fn get_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteService::new(&state).get(id).await?;
    Ok(Json(note))
}

/// GET /note
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = NoteService::new(&state).list().await?;
    Ok(Json(notes))
}

/// PUT /note/{id}
///
/// Overwrite name, dates and done flag. Categories and tags are unchanged.
pub async fn update_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    let note = NoteService::new(&state).update(id, &input).await?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /note/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteService::new(&state).delete(id).await?;

    tracing::info!(note_id = id, deleted, "Note delete requested");

    Ok(Json(DeleteResponse { deleted }))
}
