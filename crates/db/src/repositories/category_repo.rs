//! Repository for the `categories` table.

use notekeeper_core::types::DbId;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category.
    ///
    /// Returns `None` when a category with the same name already exists; the
    /// unique constraint decides, so two concurrent creates cannot both win.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name) VALUES ($1) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its exact name.
    pub async fn find_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all categories, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Rename a category.
    ///
    /// Returns `None` if no category with the given ID exists. Renaming to a
    /// name held by another category fails with the `uq_categories_name`
    /// violation.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Note associations cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the ID of the category named `name`, inserting it if absent.
    ///
    /// Lookup first; on a miss, insert with `ON CONFLICT DO NOTHING` and, if a
    /// concurrent writer inserted the same name in between, fetch its ID.
    pub async fn resolve_or_create(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(existing) = Self::find_by_name(&mut **tx, name).await? {
            return Ok(existing.id);
        }

        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO categories (name) VALUES ($1) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING id",
        )
        .bind(name)
        .fetch_optional(&mut **tx)
        .await?;
        if let Some(id) = inserted {
            tracing::debug!(category_id = id, name, "Category created by reference");
            return Ok(id);
        }

        Self::find_by_name(&mut **tx, name)
            .await?
            .map(|category| category.id)
            .ok_or(sqlx::Error::RowNotFound)
    }
}
