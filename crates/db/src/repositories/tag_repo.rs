//! Repository for the `tags` table.

use notekeeper_core::naming::{tag_colour_or_default, tag_colour_update};
use notekeeper_core::types::DbId;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::tag::{CreateTag, Tag, UpdateTag};

/// Column list for `tags` queries.
const COLUMNS: &str = "id, name, colour";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag, defaulting the colour to `#000000`.
    ///
    /// Returns `None` when a tag with the same name already exists.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, colour) VALUES ($1, $2) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .bind(tag_colour_or_default(input.colour.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by its exact name.
    pub async fn find_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<Tag>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE name = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all tags, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Update a tag's name and, when given, its colour. A blank colour is
    /// stored as the default colour.
    ///
    /// Returns `None` if no tag with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTag,
    ) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                 name = $2, \
                 colour = COALESCE($3, colour) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(tag_colour_update(input.colour.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag by ID. Note associations cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the ID of the tag named `name`, inserting it if absent.
    ///
    /// An existing tag keeps its colour; `colour` only applies to a tag
    /// created here. Same race handling as
    /// [`CategoryRepo::resolve_or_create`](crate::repositories::CategoryRepo::resolve_or_create).
    pub async fn resolve_or_create(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        colour: Option<&str>,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(existing) = Self::find_by_name(&mut **tx, name).await? {
            return Ok(existing.id);
        }

        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO tags (name, colour) VALUES ($1, $2) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING id",
        )
        .bind(name)
        .bind(tag_colour_or_default(colour))
        .fetch_optional(&mut **tx)
        .await?;
        if let Some(id) = inserted {
            tracing::debug!(tag_id = id, name, "Tag created by reference");
            return Ok(id);
        }

        Self::find_by_name(&mut **tx, name)
            .await?
            .map(|tag| tag.id)
            .ok_or(sqlx::Error::RowNotFound)
    }
}
