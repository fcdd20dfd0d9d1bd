//! Repository for the `items` table.

use metatag_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_type, title, slug, body, created_at, updated_at";

/// Provides create and lookup operations for content items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// If `item_type` is `None`, defaults to `post`.
    /// If `body` is `None`, defaults to the empty string.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (item_type, title, slug, body)
             VALUES (COALESCE($1, 'post'), $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.item_type.map(|t| t.as_str()))
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch only the slug of an item, used to build its permanent URL.
    pub async fn find_slug(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
