//! Repository for the `notes` table and the joined note read model.
//!
//! Reads join each note with both its categories and its tags in a single
//! query and rebuild [`NoteDetail`] values with [`group_note_rows`].

use std::collections::{BTreeMap, BTreeSet, HashSet};

use notekeeper_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::association::AssociationKind;
use crate::models::category::{Category, CreateCategory};
use crate::models::note::{NewNote, NoteChanges, NoteDetail, NoteJoinRow};
use crate::models::tag::{CreateTag, Tag};
use crate::repositories::{CategoryRepo, NoteAssociationRepo, TagRepo};

/// Note columns plus left-joined category and tag columns.
const JOINED_SELECT: &str = "\
    SELECT n.id AS note_id, n.name AS note_name, n.date_of_creation, n.date_of_update, n.is_done, \
           c.id AS category_id, c.name AS category_name, \
           t.id AS tag_id, t.name AS tag_name, t.colour AS tag_colour \
    FROM notes n \
    LEFT JOIN note_category nc ON nc.note_id = n.id \
    LEFT JOIN categories c ON c.id = nc.category_id \
    LEFT JOIN note_tag nt ON nt.note_id = n.id \
    LEFT JOIN tags t ON t.id = nt.tag_id";

/// Deterministic row order: notes by id, then categories and tags by id.
const JOINED_ORDER: &str = "ORDER BY n.id, c.id, t.id";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note and link it to the referenced categories and tags.
    ///
    /// Runs in one transaction: the note row, any categories or tags created
    /// by name, and the join rows become visible together. The returned note
    /// is re-read inside the transaction.
    ///
    /// References are deduplicated and resolved in name order, so concurrent
    /// creates take the name locks in the same order. A tag named more than
    /// once takes its colour from the first occurrence.
    pub async fn create(
        pool: &PgPool,
        note: &NewNote,
        categories: &[CreateCategory],
        tags: &[CreateTag],
    ) -> Result<NoteDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let note_id: DbId = sqlx::query_scalar(
            "INSERT INTO notes (name, date_of_creation, date_of_update, is_done) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&note.name)
        .bind(note.date_of_creation)
        .bind(note.date_of_update)
        .bind(note.is_done)
        .fetch_one(&mut *tx)
        .await?;

        let category_names: BTreeSet<&str> =
            categories.iter().map(|c| c.name.as_str()).collect();
        for name in category_names {
            let category_id = CategoryRepo::resolve_or_create(&mut tx, name).await?;
            NoteAssociationRepo::insert_link(
                &mut tx,
                AssociationKind::Category,
                note_id,
                category_id,
            )
            .await?;
        }

        let mut tag_colours: BTreeMap<&str, Option<&str>> = BTreeMap::new();
        for tag in tags {
            tag_colours
                .entry(tag.name.as_str())
                .or_insert(tag.colour.as_deref());
        }
        for (name, colour) in tag_colours {
            let tag_id = TagRepo::resolve_or_create(&mut tx, name, colour).await?;
            NoteAssociationRepo::insert_link(&mut tx, AssociationKind::Tag, note_id, tag_id)
                .await?;
        }

        let detail = fetch_detail(&mut *tx, note_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;

        tracing::debug!(
            note_id,
            categories = detail.categories.len(),
            tags = detail.tags.len(),
            "Note stored",
        );
        Ok(detail)
    }

    /// Find a note with its categories and tags.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NoteDetail>, sqlx::Error> {
        fetch_detail(pool, id).await
    }

    /// List every note with its categories and tags, ordered by note ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<NoteDetail>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} {JOINED_ORDER}");
        let rows = sqlx::query_as::<_, NoteJoinRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(group_note_rows(rows))
    }

    /// Overwrite a note's own columns. Associations are left untouched.
    ///
    /// Returns `None` if no note with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &NoteChanges,
    ) -> Result<Option<NoteDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE notes SET \
                 name = $2, \
                 date_of_creation = COALESCE($3, date_of_creation), \
                 date_of_update = $4, \
                 is_done = COALESCE($5, is_done) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.date_of_creation)
        .bind(changes.date_of_update)
        .bind(changes.is_done)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let detail = fetch_detail(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(detail)
    }

    /// Delete a note by ID. Its associations cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Run the joined query for one note on any executor (pool or transaction).
async fn fetch_detail<'e, E>(executor: E, id: DbId) -> Result<Option<NoteDetail>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("{JOINED_SELECT} WHERE n.id = $1 {JOINED_ORDER}");
    let rows = sqlx::query_as::<_, NoteJoinRow>(&query)
        .bind(id)
        .fetch_all(executor)
        .await?;
    Ok(group_note_rows(rows).into_iter().next())
}

/// Per-note state while scanning joined rows.
struct NoteAccumulator {
    detail: NoteDetail,
    seen_categories: HashSet<DbId>,
    seen_tags: HashSet<DbId>,
}

/// Rebuild notes from joined rows.
///
/// Rows are grouped by note id. Because a note's categories and tags are
/// joined in the same query, each category appears once per tag (and vice
/// versa); the seen-id sets keep every category and tag exactly once, in
/// first-seen order. Notes come out ordered by id.
pub fn group_note_rows(rows: Vec<NoteJoinRow>) -> Vec<NoteDetail> {
    let mut notes: BTreeMap<DbId, NoteAccumulator> = BTreeMap::new();

    for row in rows {
        let acc = notes.entry(row.note_id).or_insert_with(|| NoteAccumulator {
            detail: NoteDetail {
                id: row.note_id,
                name: row.note_name.clone(),
                date_of_creation: row.date_of_creation,
                date_of_update: row.date_of_update,
                is_done: row.is_done,
                categories: Vec::new(),
                tags: Vec::new(),
            },
            seen_categories: HashSet::new(),
            seen_tags: HashSet::new(),
        });

        if let (Some(id), Some(name)) = (row.category_id, row.category_name) {
            if acc.seen_categories.insert(id) {
                acc.detail.categories.push(Category { id, name });
            }
        }

        if let (Some(id), Some(name), Some(colour)) = (row.tag_id, row.tag_name, row.tag_colour) {
            if acc.seen_tags.insert(id) {
                acc.detail.tags.push(Tag { id, name, colour });
            }
        }
    }

    notes.into_values().map(|acc| acc.detail).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
