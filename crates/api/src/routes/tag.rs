use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// Tag routes mounted at `/tag`.
///
/// ```text
/// GET    /                                   -> list_tags
/// POST   /                                   -> create_tag
/// GET    /{id}                               -> get_tag
/// PUT    /{id}                               -> update_tag
/// DELETE /{id}                               -> delete_tag
/// POST   /{id}/note/{note_id}                -> attach_note
/// DELETE /{id}/note/{note_id}                -> detach_note
/// PUT    /{id}/note/{note_id}/newTag/{new_id} -> replace_note_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tag::list_tags).post(tag::create_tag))
        .route(
            "/{id}",
            get(tag::get_tag).put(tag::update_tag).delete(tag::delete_tag),
        )
        .route(
            "/{id}/note/{note_id}",
            post(tag::attach_note).delete(tag::detach_note),
        )
        .route("/{id}/note/{note_id}/newTag/{new_id}", put(tag::replace_note_tag))
}
