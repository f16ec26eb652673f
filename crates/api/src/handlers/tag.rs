//! Handlers for tags and their links to notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeeper_core::types::DbId;
use notekeeper_db::models::association::AssociationKind;
use notekeeper_db::models::tag::{CreateTag, UpdateTag};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DeleteResponse;
use crate::services::{AssociationService, TagService};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tag CRUD
// ---------------------------------------------------------------------------

/// POST /tag
///
/// Create a tag. A missing colour becomes `#000000`.
pub async fn create_tag(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = TagService::new(&state).create(&input).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /tag/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagService::new(&state).get(id).await?;
    Ok(Json(tag))
}

/// GET /tag
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagService::new(&state).list().await?;
    Ok(Json(tags))
}

/// PUT /tag/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = TagService::new(&state).update(id, &input).await?;

    tracing::info!(tag_id = id, "Tag updated");

    Ok(Json(tag))
}

/// DELETE /tag/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagService::new(&state).delete(id).await?;

    tracing::info!(tag_id = id, deleted, "Tag delete requested");

    Ok(Json(DeleteResponse { deleted }))
}

// ---------------------------------------------------------------------------
// Note links
// ---------------------------------------------------------------------------

/// POST /tag/{id}/note/{note_id}
pub async fn attach_note(
    State(state): State<AppState>,
    AppPath((tag_id, note_id)): AppPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let note = AssociationService::new(&state, AssociationKind::Tag)
        .attach(note_id, tag_id)
        .await?;

    tracing::info!(note_id, tag_id, "Tag attached to note");

    Ok(Json(note))
}

/// PUT /tag/{id}/note/{note_id}/newTag/{new_id}
pub async fn replace_note_tag(
    State(state): State<AppState>,
    AppPath((tag_id, note_id, new_tag_id)): AppPath<(DbId, DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let note = AssociationService::new(&state, AssociationKind::Tag)
        .replace(note_id, tag_id, new_tag_id)
        .await?;

    tracing::info!(note_id, old_tag_id = tag_id, new_tag_id, "Note tag replaced");

    Ok(Json(note))
}

/// DELETE /tag/{id}/note/{note_id}
pub async fn detach_note(
    State(state): State<AppState>,
    AppPath((tag_id, note_id)): AppPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssociationService::new(&state, AssociationKind::Tag)
        .detach(note_id, tag_id)
        .await?;

    tracing::info!(note_id, tag_id, "Tag detached from note");

    Ok(Json(DeleteResponse { deleted }))
}
