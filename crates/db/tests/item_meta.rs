//! Integration tests for the item and item metadata repositories and the
//! PostgreSQL field store.

use metatag_core::head::PageView;
use metatag_core::item::ItemType;
use metatag_core::manager::SeoManager;
use metatag_core::record::SeoSubmission;
use metatag_core::store::FieldStore;
use metatag_db::models::item::CreateItem;
use metatag_db::repositories::{ItemMetaRepo, ItemRepo};
use metatag_db::store::PgFieldStore;
use sqlx::PgPool;

const SITE_URL: &str = "https://example.com";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(slug: &str) -> CreateItem {
    CreateItem {
        item_type: None,
        title: format!("Item {slug}"),
        slug: slug.to_string(),
        body: Some("cat cat dog".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_item_defaults_to_post(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("hello")).await.unwrap();
    assert_eq!(item.item_type, "post");
    assert_eq!(item.kind().unwrap(), ItemType::Post);
    assert_eq!(item.body, "cat cat dog");

    let found = ItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(found.slug, "hello");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_item_with_explicit_type(pool: PgPool) {
    let input = CreateItem {
        item_type: Some(ItemType::Page),
        body: None,
        ..new_item("about")
    };
    let item = ItemRepo::create(&pool, &input).await.unwrap();
    assert_eq!(item.kind().unwrap(), ItemType::Page);
    assert_eq!(item.body, "");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_slug_is_rejected(pool: PgPool) {
    ItemRepo::create(&pool, &new_item("dup")).await.unwrap();
    let err = ItemRepo::create(&pool, &new_item("dup")).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_items_slug"));
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_item_is_none(pool: PgPool) {
    assert!(ItemRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(ItemRepo::find_slug(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn upsert_overwrites_existing_value(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("meta")).await.unwrap();

    let first = ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "One")
        .await
        .unwrap();
    let second = ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "Two")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.meta_value, "Two");
    assert_eq!(ItemMetaRepo::list_for_item(&pool, item.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_by_keys_filters_foreign_keys(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("keys")).await.unwrap();
    ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "T").await.unwrap();
    ItemMetaRepo::upsert(&pool, item.id, "_edit_lock", "1").await.unwrap();

    let rows = ItemMetaRepo::list_by_keys(&pool, item.id, &["_seo_title", "_og_title"])
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].meta_key, "_seo_title");
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_upsert_writes_every_pair(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("bulk")).await.unwrap();
    ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "Old").await.unwrap();

    let rows = ItemMetaRepo::bulk_upsert(
        &pool,
        item.id,
        &[("_seo_title", "New"), ("_og_title", "OG")],
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].meta_value, "New");
    assert_eq!(ItemMetaRepo::list_for_item(&pool, item.id).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_upsert_failure_rolls_back_earlier_pairs(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("rollback")).await.unwrap();
    ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "Old").await.unwrap();

    // PostgreSQL text columns reject NUL bytes, so the second write fails.
    let result = ItemMetaRepo::bulk_upsert(
        &pool,
        item.id,
        &[("_seo_title", "New"), ("_seo_description", "bad\0value")],
    )
    .await;
    assert!(result.is_err());

    assert_eq!(
        ItemMetaRepo::get_value(&pool, item.id, "_seo_title").await.unwrap(),
        Some("Old".to_string())
    );
    assert_eq!(
        ItemMetaRepo::get_value(&pool, item.id, "_seo_description").await.unwrap(),
        None
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn meta_rows_are_removed_with_their_item(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("gone")).await.unwrap();
    ItemMetaRepo::upsert(&pool, item.id, "_seo_title", "T").await.unwrap();

    sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(item.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(ItemMetaRepo::list_for_item(&pool, item.id).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// PgFieldStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn store_reads_unset_fields_as_empty(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("empty")).await.unwrap();
    let store = PgFieldStore::new(pool, SITE_URL);

    assert_eq!(store.get_field(item.id, "_seo_title").await.unwrap(), "");
    let record = store.load_record(item.id).await.unwrap();
    assert_eq!(record, Default::default());
}

#[sqlx::test(migrations = "./migrations")]
async fn store_builds_permalink_from_slug(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("my-post")).await.unwrap();
    let store = PgFieldStore::new(pool, "https://example.com/");

    assert_eq!(
        store.permanent_url(item.id).await.unwrap(),
        "https://example.com/my-post/"
    );
    assert!(matches!(
        store.permanent_url(999_999).await,
        Err(sqlx::Error::RowNotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_save_through_manager(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("partial")).await.unwrap();
    let manager = SeoManager::new(PgFieldStore::new(pool, SITE_URL));

    manager
        .persist_on_save(
            item.id,
            &SeoSubmission {
                seo_title: Some("<i>Original</i>".into()),
                seo_keywords: Some("a,\tb".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    manager
        .persist_on_save(
            item.id,
            &SeoSubmission {
                seo_keywords: Some("c".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let record = manager.record(item.id).await.unwrap();
    assert_eq!(record.seo_title, "Original");
    assert_eq!(record.seo_keywords, "c");
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_save_leaves_no_partial_write(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("atomic")).await.unwrap();
    let manager = SeoManager::new(PgFieldStore::new(pool, SITE_URL));

    let result = manager
        .persist_on_save(
            item.id,
            &SeoSubmission {
                seo_title: Some("New title".into()),
                seo_description: Some("broken\0description".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());

    let record = manager.record(item.id).await.unwrap();
    assert_eq!(record.seo_title, "");
    assert_eq!(record.seo_description, "");
}

#[sqlx::test(migrations = "./migrations")]
async fn head_tags_from_database(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("head")).await.unwrap();
    let manager = SeoManager::new(PgFieldStore::new(pool, SITE_URL));

    let html = manager
        .render_head_tags(PageView::Single { item_id: item.id })
        .await
        .unwrap();
    assert_eq!(
        html,
        "<link rel=\"canonical\" href=\"https://example.com/head/\">\n"
    );

    manager
        .persist_on_save(
            item.id,
            &SeoSubmission {
                seo_title: Some("Head Title".into()),
                canonical_url: Some("https://example.com/elsewhere".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let html = manager
        .render_head_tags(PageView::Single { item_id: item.id })
        .await
        .unwrap();
    assert_eq!(
        html,
        "<title>Head Title</title>\n<link rel=\"canonical\" href=\"https://example.com/elsewhere\">\n"
    );
}
