#![allow(dead_code)]

use sqlx::PgPool;

use notekeeper_core::types::DbId;
use notekeeper_db::models::association::AssociationKind;

/// Number of join rows linking the note to categories or tags.
pub async fn link_count(pool: &PgPool, kind: AssociationKind, note_id: DbId) -> i64 {
    let query = format!(
        "SELECT COUNT(*) FROM {table} WHERE note_id = $1",
        table = kind.join_table(),
    );
    sqlx::query_scalar(&query)
        .bind(note_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Whether a join row links the note to `target_id`.
pub async fn is_linked(
    pool: &PgPool,
    kind: AssociationKind,
    note_id: DbId,
    target_id: DbId,
) -> bool {
    let query = format!(
        "SELECT EXISTS(SELECT 1 FROM {table} WHERE note_id = $1 AND {column} = $2)",
        table = kind.join_table(),
        column = kind.target_column(),
    );
    sqlx::query_scalar(&query)
        .bind(note_id)
        .bind(target_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
