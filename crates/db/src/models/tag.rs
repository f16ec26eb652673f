//! Tag model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use notekeeper_core::types::DbId;

/// A row from the `tags` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub colour: String,
}

/// DTO for creating a tag. Also used as a by-name tag reference when
/// creating a note. A missing colour becomes `#000000`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(custom(function = "notekeeper_core::naming::label_name"))]
    pub name: String,
    pub colour: Option<String>,
}

/// DTO for updating a tag. A missing colour keeps the stored one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTag {
    #[validate(custom(function = "notekeeper_core::naming::label_name"))]
    pub name: String,
    pub colour: Option<String>,
}
