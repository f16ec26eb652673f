pub mod category;
pub mod health;
pub mod note;
pub mod tag;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /category                                          list, create
/// /category/{id}                                     get, update, delete
/// /category/{id}/note/{note_id}                      attach (POST), detach (DELETE)
/// /category/{id}/note/{note_id}/newCategory/{new_id} replace (PUT)
///
/// /tag                                               list, create
/// /tag/{id}                                          get, update, delete
/// /tag/{id}/note/{note_id}                           attach (POST), detach (DELETE)
/// /tag/{id}/note/{note_id}/newTag/{new_id}           replace (PUT)
///
/// /note                                              list, create
/// /note/{id}                                         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/category", category::router())
        .nest("/tag", tag::router())
        .nest("/note", note::router())
}
