use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes mounted at `/category`.
///
/// ```text
/// GET    /                                     -> list_categories
/// POST   /                                     -> create_category
/// GET    /{id}                                 -> get_category
/// PUT    /{id}                                 -> update_category
/// DELETE /{id}                                 -> delete_category
/// POST   /{id}/note/{note_id}                  -> attach_note
/// DELETE /{id}/note/{note_id}                  -> detach_note
/// PUT    /{id}/note/{note_id}/newCategory/{new_id} -> replace_note_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/{id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/{id}/note/{note_id}",
            post(category::attach_note).delete(category::detach_note),
        )
        .route(
            "/{id}/note/{note_id}/newCategory/{new_id}",
            put(category::replace_note_category),
        )
}
