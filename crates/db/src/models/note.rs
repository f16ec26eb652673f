//! Note models: joined rows, reconstructed notes, storage records and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use notekeeper_core::types::{Date, DbId};

use crate::models::category::{Category, CreateCategory};
use crate::models::tag::{CreateTag, Tag};

// ---------------------------------------------------------------------------
// Read model
// ---------------------------------------------------------------------------

/// One row of the note ⟕ categories ⟕ tags join.
///
/// A note with `c` categories and `t` tags produces `max(c, 1) * max(t, 1)`
/// rows, so the same category or tag repeats across rows.
#[derive(Debug, Clone, FromRow)]
pub struct NoteJoinRow {
    pub note_id: DbId,
    pub note_name: String,
    pub date_of_creation: Date,
    pub date_of_update: Date,
    pub is_done: bool,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub tag_id: Option<DbId>,
    pub tag_name: Option<String>,
    pub tag_colour: Option<String>,
}

/// A note together with its categories and tags, each listed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetail {
    pub id: DbId,
    pub name: String,
    pub date_of_creation: Date,
    pub date_of_update: Date,
    pub is_done: bool,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

// ---------------------------------------------------------------------------
// Storage records (fully resolved, written by the repository)
// ---------------------------------------------------------------------------

/// Values inserted into `notes` on create. Every column is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub date_of_creation: Date,
    pub date_of_update: Date,
    pub is_done: bool,
}

/// Values written to `notes` on update. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChanges {
    pub name: String,
    pub date_of_creation: Option<Date>,
    pub date_of_update: Date,
    pub is_done: Option<bool>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Request body for `POST /note`.
///
/// Categories and tags are referenced by name and resolved (or created) when
/// the note is stored. An absent or `null` list means no references.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    #[validate(custom(function = "notekeeper_core::naming::note_name"))]
    pub name: String,
    pub date_of_creation: Option<Date>,
    pub date_of_update: Option<Date>,
    pub is_done: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub categories: Vec<CreateCategory>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub tags: Vec<CreateTag>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `PUT /note/{id}`. Associations are not touched; any
/// `categories` / `tags` fields in the body are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    #[validate(custom(function = "notekeeper_core::naming::note_name"))]
    pub name: String,
    pub date_of_creation: Option<Date>,
    pub date_of_update: Option<Date>,
    pub is_done: Option<bool>,
}
