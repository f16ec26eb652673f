//! Integration tests for note ↔ category / tag association writes.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use notekeeper_core::types::DbId;
use notekeeper_db::models::association::{AssociationKind, AssociationOutcome};
use notekeeper_db::models::category::CreateCategory;
use notekeeper_db::models::note::NewNote;
use notekeeper_db::models::tag::CreateTag;
use notekeeper_db::repositories::{CategoryRepo, NoteAssociationRepo, NoteRepo, TagRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn note(pool: &PgPool, name: &str) -> DbId {
    let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    NoteRepo::create(
        pool,
        &NewNote {
            name: name.to_string(),
            date_of_creation: date,
            date_of_update: date,
            is_done: false,
        },
        &[],
        &[],
    )
    .await
    .unwrap()
    .id
}

async fn category(pool: &PgPool, name: &str) -> DbId {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap()
    .id
}

async fn tag(pool: &PgPool, name: &str) -> DbId {
    TagRepo::create(
        pool,
        &CreateTag {
            name: name.to_string(),
            colour: None,
        },
    )
    .await
    .unwrap()
    .unwrap()
    .id
}

const CATEGORY: AssociationKind = AssociationKind::Category;
const TAG: AssociationKind = AssociationKind::Tag;

// ---------------------------------------------------------------------------
// Attach
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_attach_twice_links_once(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let work = category(&pool, "Work").await;

    let first = NoteAssociationRepo::attach(&pool, CATEGORY, note_id, work).await.unwrap();
    let second = NoteAssociationRepo::attach(&pool, CATEGORY, note_id, work).await.unwrap();

    assert_eq!(first, AssociationOutcome::Applied);
    assert_eq!(second, AssociationOutcome::Applied);
    assert_eq!(common::link_count(&pool, CATEGORY, note_id).await, 1);

    let detail = NoteRepo::find_by_id(&pool, note_id).await.unwrap().unwrap();
    assert_eq!(detail.categories.len(), 1);
    assert_eq!(detail.categories[0].id, work);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_attach_reports_missing_rows(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let urgent = tag(&pool, "urgent").await;

    let missing_note = NoteAssociationRepo::attach(&pool, TAG, 999_999, urgent).await.unwrap();
    assert_matches!(missing_note, AssociationOutcome::NoteMissing);

    let missing_tag = NoteAssociationRepo::attach(&pool, TAG, note_id, 999_999).await.unwrap();
    assert_matches!(missing_tag, AssociationOutcome::TargetMissing(999_999));

    assert!(!common::is_linked(&pool, TAG, note_id, urgent).await);
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_moves_link(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let old = category(&pool, "Old").await;
    let new = category(&pool, "New").await;
    NoteAssociationRepo::attach(&pool, CATEGORY, note_id, old).await.unwrap();

    let outcome = NoteAssociationRepo::replace(&pool, CATEGORY, note_id, old, new)
        .await
        .unwrap();

    assert_eq!(outcome, AssociationOutcome::Applied);
    assert!(!common::is_linked(&pool, CATEGORY, note_id, old).await);
    assert!(common::is_linked(&pool, CATEGORY, note_id, new).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_onto_existing_link_keeps_single_row(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let urgent = tag(&pool, "urgent").await;
    let later = tag(&pool, "later").await;
    NoteAssociationRepo::attach(&pool, TAG, note_id, urgent).await.unwrap();
    NoteAssociationRepo::attach(&pool, TAG, note_id, later).await.unwrap();

    let outcome = NoteAssociationRepo::replace(&pool, TAG, note_id, urgent, later)
        .await
        .unwrap();

    assert_eq!(outcome, AssociationOutcome::Applied);
    assert_eq!(common::link_count(&pool, TAG, note_id).await, 1);
    assert!(common::is_linked(&pool, TAG, note_id, later).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_reports_missing_rows_and_changes_nothing(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let a = category(&pool, "A").await;
    let b = category(&pool, "B").await;

    assert_matches!(
        NoteAssociationRepo::replace(&pool, CATEGORY, 999_999, a, b).await.unwrap(),
        AssociationOutcome::NoteMissing
    );
    assert_matches!(
        NoteAssociationRepo::replace(&pool, CATEGORY, note_id, 999_999, b).await.unwrap(),
        AssociationOutcome::TargetMissing(999_999)
    );
    assert_matches!(
        NoteAssociationRepo::replace(&pool, CATEGORY, note_id, a, 888_888).await.unwrap(),
        AssociationOutcome::TargetMissing(888_888)
    );

    // Both targets exist but the note was never linked to `a`.
    assert_matches!(
        NoteAssociationRepo::replace(&pool, CATEGORY, note_id, a, b).await.unwrap(),
        AssociationOutcome::LinkMissing(id) if id == a
    );
    assert_eq!(common::link_count(&pool, CATEGORY, note_id).await, 0);
}

// ---------------------------------------------------------------------------
// Detach
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_detach(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let urgent = tag(&pool, "urgent").await;
    NoteAssociationRepo::attach(&pool, TAG, note_id, urgent).await.unwrap();

    let outcome = NoteAssociationRepo::detach(&pool, TAG, note_id, urgent).await.unwrap();
    assert_eq!(outcome, AssociationOutcome::Applied);

    let again = NoteAssociationRepo::detach(&pool, TAG, note_id, urgent).await.unwrap();
    assert_matches!(again, AssociationOutcome::LinkMissing(id) if id == urgent);

    // The tag itself is untouched.
    assert!(TagRepo::find_by_id(&pool, urgent).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_and_tag_links_are_independent(pool: PgPool) {
    let note_id = note(&pool, "Plan").await;
    let work = category(&pool, "Work").await;
    let urgent = tag(&pool, "urgent").await;

    NoteAssociationRepo::attach(&pool, CATEGORY, note_id, work).await.unwrap();
    NoteAssociationRepo::attach(&pool, TAG, note_id, urgent).await.unwrap();
    NoteAssociationRepo::detach(&pool, CATEGORY, note_id, work).await.unwrap();

    let detail = NoteRepo::find_by_id(&pool, note_id).await.unwrap().unwrap();
    assert!(detail.categories.is_empty());
    assert_eq!(detail.tags.len(), 1);
}
