//! Handlers for categories and their links to notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeeper_core::types::DbId;
use notekeeper_db::models::association::AssociationKind;
use notekeeper_db::models::category::{CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DeleteResponse;
use crate::services::{AssociationService, CategoryService};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Category CRUD
// ---------------------------------------------------------------------------

/// POST /category
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::new(&state).create(&input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::new(&state).get(id).await?;
    Ok(Json(category))
}

/// GET /category
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryService::new(&state).list().await?;
    Ok(Json(categories))
}

/// PUT /category/{id}
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::new(&state).update(id, &input).await?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /category/{id}
///
/// Deleting an unknown id is not an error; the body reports `deleted: false`.
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryService::new(&state).delete(id).await?;

    tracing::info!(category_id = id, deleted, "Category delete requested");

    Ok(Json(DeleteResponse { deleted }))
}

// ---------------------------------------------------------------------------
// Note links
// ---------------------------------------------------------------------------

/// POST /category/{id}/note/{note_id}
pub async fn attach_note(
    State(state): State<AppState>,
    AppPath((category_id, note_id)): AppPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let note = AssociationService::new(&state, AssociationKind::Category)
        .attach(note_id, category_id)
        .await?;

    tracing::info!(note_id, category_id, "Category attached to note");

    Ok(Json(note))
}

/// PUT /category/{id}/note/{note_id}/newCategory/{new_id}
pub async fn replace_note_category(
    State(state): State<AppState>,
    AppPath((category_id, note_id, new_category_id)): AppPath<(DbId, DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let note = AssociationService::new(&state, AssociationKind::Category)
        .replace(note_id, category_id, new_category_id)
        .await?;

    tracing::info!(
        note_id,
        old_category_id = category_id,
        new_category_id,
        "Note category replaced",
    );

    Ok(Json(note))
}

/// DELETE /category/{id}/note/{note_id}
pub async fn detach_note(
    State(state): State<AppState>,
    AppPath((category_id, note_id)): AppPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssociationService::new(&state, AssociationKind::Category)
        .detach(note_id, category_id)
        .await?;

    tracing::info!(note_id, category_id, "Category detached from note");

    Ok(Json(DeleteResponse { deleted }))
}
