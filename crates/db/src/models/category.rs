//! Category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use notekeeper_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a category. Also used as a by-name category reference
/// when creating a note.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(custom(function = "notekeeper_core::naming::label_name"))]
    pub name: String,
}

/// DTO for renaming a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(custom(function = "notekeeper_core::naming::label_name"))]
    pub name: String,
}
