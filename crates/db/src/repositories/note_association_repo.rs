//! Repository for the `note_category` and `note_tag` join tables.
//!
//! Both tables have the same shape, so every operation takes an
//! [`AssociationKind`] selecting the table and target. Table and column
//! names come from the enum, never from input.

use notekeeper_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::association::{AssociationKind, AssociationOutcome};

/// Provides attach / replace / detach operations for note associations.
pub struct NoteAssociationRepo;

impl NoteAssociationRepo {
    /// Link a note to a category or tag.
    ///
    /// Both rows are key-share locked for the rest of the transaction so a
    /// concurrent delete cannot slip in between the checks and the insert.
    /// Linking an already linked pair succeeds without adding a row.
    pub async fn attach(
        pool: &PgPool,
        kind: AssociationKind,
        note_id: DbId,
        target_id: DbId,
    ) -> Result<AssociationOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_row(&mut tx, "notes", note_id).await? {
            return Ok(AssociationOutcome::NoteMissing);
        }
        if !lock_row(&mut tx, kind.target_table(), target_id).await? {
            return Ok(AssociationOutcome::TargetMissing(target_id));
        }

        let inserted = Self::insert_link(&mut tx, kind, note_id, target_id).await?;
        tx.commit().await?;

        tracing::debug!(
            kind = kind.join_table(),
            note_id,
            target_id,
            inserted,
            "Association attached",
        );
        Ok(AssociationOutcome::Applied)
    }

    /// Move a note's link from `old_target_id` to `new_target_id`.
    ///
    /// The note, both targets and the existing link must all be present. If
    /// the note is already linked to the new target, the old link is simply
    /// dropped so the pair stays unique.
    pub async fn replace(
        pool: &PgPool,
        kind: AssociationKind,
        note_id: DbId,
        old_target_id: DbId,
        new_target_id: DbId,
    ) -> Result<AssociationOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_row(&mut tx, "notes", note_id).await? {
            return Ok(AssociationOutcome::NoteMissing);
        }
        if !lock_row(&mut tx, kind.target_table(), old_target_id).await? {
            return Ok(AssociationOutcome::TargetMissing(old_target_id));
        }
        if !lock_row(&mut tx, kind.target_table(), new_target_id).await? {
            return Ok(AssociationOutcome::TargetMissing(new_target_id));
        }

        let delete_query = format!(
            "DELETE FROM {table} WHERE note_id = $1 AND {column} = $2",
            table = kind.join_table(),
            column = kind.target_column(),
        );
        let removed = sqlx::query(&delete_query)
            .bind(note_id)
            .bind(old_target_id)
            .execute(&mut *tx)
            .await?;
        if removed.rows_affected() == 0 {
            return Ok(AssociationOutcome::LinkMissing(old_target_id));
        }

        Self::insert_link(&mut tx, kind, note_id, new_target_id).await?;
        tx.commit().await?;

        tracing::debug!(
            kind = kind.join_table(),
            note_id,
            old_target_id,
            new_target_id,
            "Association replaced",
        );
        Ok(AssociationOutcome::Applied)
    }

    /// Remove the link between a note and a category or tag.
    pub async fn detach(
        pool: &PgPool,
        kind: AssociationKind,
        note_id: DbId,
        target_id: DbId,
    ) -> Result<AssociationOutcome, sqlx::Error> {
        let query = format!(
            "DELETE FROM {table} WHERE note_id = $1 AND {column} = $2",
            table = kind.join_table(),
            column = kind.target_column(),
        );
        let result = sqlx::query(&query)
            .bind(note_id)
            .bind(target_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            Ok(AssociationOutcome::LinkMissing(target_id))
        } else {
            Ok(AssociationOutcome::Applied)
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert a join row within an existing transaction.
    ///
    /// Returns `false` when the pair was already linked.
    pub(crate) async fn insert_link(
        tx: &mut Transaction<'_, Postgres>,
        kind: AssociationKind,
        note_id: DbId,
        target_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (note_id, {column}) VALUES ($1, $2) \
             ON CONFLICT (note_id, {column}) DO NOTHING",
            table = kind.join_table(),
            column = kind.target_column(),
        );
        let result = sqlx::query(&query)
            .bind(note_id)
            .bind(target_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Key-share lock the row with `id` in `table`; `false` if it does not exist.
async fn lock_row(
    tx: &mut Transaction<'_, Postgres>,
    table: &'static str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT id FROM {table} WHERE id = $1 FOR KEY SHARE");
    let found: Option<DbId> = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(found.is_some())
}
