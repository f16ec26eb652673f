//! Integration tests for the category and tag repositories:
//! - Unique names via `ON CONFLICT DO NOTHING`
//! - Update / delete semantics for absent rows
//! - Resolve-or-create idempotence

use notekeeper_db::models::category::{CreateCategory, UpdateCategory};
use notekeeper_db::models::tag::{CreateTag, UpdateTag};
use notekeeper_db::repositories::{CategoryRepo, TagRepo};
use sqlx::PgPool;

fn category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
    }
}

fn tag(name: &str, colour: Option<&str>) -> CreateTag {
    CreateTag {
        name: name.to_string(),
        colour: colour.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_category_and_reject_duplicate(pool: PgPool) {
    let work = CategoryRepo::create(&pool, &category("Work"))
        .await
        .unwrap()
        .expect("first insert should succeed");
    assert_eq!(work.name, "Work");

    let duplicate = CategoryRepo::create(&pool, &category("Work")).await.unwrap();
    assert!(duplicate.is_none(), "duplicate name must not insert");

    let home = CategoryRepo::create(&pool, &category("Home")).await.unwrap();
    assert!(home.is_some());

    let all = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, work.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_category_by_id_and_name(pool: PgPool) {
    let work = CategoryRepo::create(&pool, &category("Work"))
        .await
        .unwrap()
        .unwrap();

    let by_id = CategoryRepo::find_by_id(&pool, work.id).await.unwrap();
    assert_eq!(by_id, Some(work.clone()));

    let by_name = CategoryRepo::find_by_name(&pool, "Work").await.unwrap();
    assert_eq!(by_name, Some(work));

    assert!(CategoryRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(CategoryRepo::find_by_name(&pool, "work").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_category(pool: PgPool) {
    let work = CategoryRepo::create(&pool, &category("Wrok"))
        .await
        .unwrap()
        .unwrap();

    let renamed = CategoryRepo::update(
        &pool,
        work.id,
        &UpdateCategory {
            name: "Work".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Work");
    assert_eq!(renamed.id, work.id);

    let missing = CategoryRepo::update(
        &pool,
        999_999,
        &UpdateCategory {
            name: "Ghost".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_category_to_taken_name_violates_unique(pool: PgPool) {
    CategoryRepo::create(&pool, &category("Work")).await.unwrap();
    let home = CategoryRepo::create(&pool, &category("Home"))
        .await
        .unwrap()
        .unwrap();

    let err = CategoryRepo::update(
        &pool,
        home.id,
        &UpdateCategory {
            name: "Work".to_string(),
        },
    )
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_categories_name"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_category(pool: PgPool) {
    let work = CategoryRepo::create(&pool, &category("Work"))
        .await
        .unwrap()
        .unwrap();

    assert!(CategoryRepo::delete(&pool, work.id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, work.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, work.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_resolve_or_create_is_idempotent(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let first = CategoryRepo::resolve_or_create(&mut tx, "Work").await.unwrap();
    let second = CategoryRepo::resolve_or_create(&mut tx, "Work").await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 1);

    // An existing row created outside the transaction is reused too.
    let existing = CategoryRepo::create(&pool, &category("Home"))
        .await
        .unwrap()
        .unwrap();
    let mut tx = pool.begin().await.unwrap();
    let resolved = CategoryRepo::resolve_or_create(&mut tx, "Home").await.unwrap();
    tx.commit().await.unwrap();
    assert_eq!(resolved, existing.id);
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_tag_colour_defaults(pool: PgPool) {
    let plain = TagRepo::create(&pool, &tag("urgent", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(plain.colour, "#000000");

    let coloured = TagRepo::create(&pool, &tag("later", Some("#00ff00")))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(coloured.colour, "#00ff00");

    let duplicate = TagRepo::create(&pool, &tag("urgent", Some("#ffffff")))
        .await
        .unwrap();
    assert!(duplicate.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_tag_keeps_colour_when_absent(pool: PgPool) {
    let urgent = TagRepo::create(&pool, &tag("urgent", Some("#ff0000")))
        .await
        .unwrap()
        .unwrap();

    let renamed = TagRepo::update(
        &pool,
        urgent.id,
        &UpdateTag {
            name: "critical".to_string(),
            colour: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "critical");
    assert_eq!(renamed.colour, "#ff0000");

    let recoloured = TagRepo::update(
        &pool,
        urgent.id,
        &UpdateTag {
            name: "critical".to_string(),
            colour: Some("#0000ff".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(recoloured.colour, "#0000ff");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_tag_with_blank_colour_stores_default(pool: PgPool) {
    let urgent = TagRepo::create(&pool, &tag("urgent", Some("#ff0000")))
        .await
        .unwrap()
        .unwrap();

    let updated = TagRepo::update(
        &pool,
        urgent.id,
        &UpdateTag {
            name: "urgent".to_string(),
            colour: Some(String::new()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.colour, "#000000");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_tag_resolve_or_create_keeps_existing_colour(pool: PgPool) {
    let urgent = TagRepo::create(&pool, &tag("urgent", Some("#ff0000")))
        .await
        .unwrap()
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    let resolved = TagRepo::resolve_or_create(&mut tx, "urgent", Some("#00ff00"))
        .await
        .unwrap();
    let created = TagRepo::resolve_or_create(&mut tx, "fresh", None).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(resolved, urgent.id);
    let stored = TagRepo::find_by_id(&pool, urgent.id).await.unwrap().unwrap();
    assert_eq!(stored.colour, "#ff0000");

    let fresh = TagRepo::find_by_id(&pool, created).await.unwrap().unwrap();
    assert_eq!(fresh.colour, "#000000");
}
