//! Shared response body types for API handlers.
//!
//! Entities are returned as bare JSON objects or arrays; only deletions use a
//! dedicated wrapper.

use serde::Serialize;

/// `{ "deleted": bool }` body returned by delete and detach endpoints.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DeleteResponse { deleted }))
/// ```
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
