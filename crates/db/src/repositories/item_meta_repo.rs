//! Repository for the `item_meta` key/value table.

use metatag_core::types::DbId;
use sqlx::PgPool;

use crate::models::item_meta::ItemMeta;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, meta_key, meta_value, created_at, updated_at";

/// Provides read and upsert operations for item metadata.
pub struct ItemMetaRepo;

impl ItemMetaRepo {
    /// Read a single value. `None` when the key was never written.
    pub async fn get_value(
        pool: &PgPool,
        item_id: DbId,
        meta_key: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT meta_value FROM item_meta WHERE item_id = $1 AND meta_key = $2",
        )
        .bind(item_id)
        .bind(meta_key)
        .fetch_optional(pool)
        .await
    }

    /// Insert or overwrite a value, returning the stored row.
    ///
    /// If a row for the same (item_id, meta_key) exists, only `meta_value`
    /// and `updated_at` change.
    pub async fn upsert(
        pool: &PgPool,
        item_id: DbId,
        meta_key: &str,
        meta_value: &str,
    ) -> Result<ItemMeta, sqlx::Error> {
        sqlx::query_as::<_, ItemMeta>(&upsert_query())
            .bind(item_id)
            .bind(meta_key)
            .bind(meta_value)
            .fetch_one(pool)
            .await
    }

    /// Upsert several values of one item in a single transaction.
    ///
    /// Either every pair is stored or none is. Pairs are written in the
    /// given order, so concurrent batches over the same keys queue on the
    /// row locks instead of interleaving.
    pub async fn bulk_upsert(
        pool: &PgPool,
        item_id: DbId,
        pairs: &[(&str, &str)],
    ) -> Result<Vec<ItemMeta>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(pairs.len());

        let query = upsert_query();
        for &(meta_key, meta_value) in pairs {
            let row = sqlx::query_as::<_, ItemMeta>(&query)
                .bind(item_id)
                .bind(meta_key)
                .bind(meta_value)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// List the rows of an item whose key is in `meta_keys`, ordered by key.
    pub async fn list_by_keys(
        pool: &PgPool,
        item_id: DbId,
        meta_keys: &[&str],
    ) -> Result<Vec<ItemMeta>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_meta \
             WHERE item_id = $1 AND meta_key = ANY($2) \
             ORDER BY meta_key"
        );
        sqlx::query_as::<_, ItemMeta>(&query)
            .bind(item_id)
            .bind(meta_keys)
            .fetch_all(pool)
            .await
    }

    /// List every metadata row of an item, ordered by key.
    pub async fn list_for_item(pool: &PgPool, item_id: DbId) -> Result<Vec<ItemMeta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_meta WHERE item_id = $1 ORDER BY meta_key");
        sqlx::query_as::<_, ItemMeta>(&query)
            .bind(item_id)
            .fetch_all(pool)
            .await
    }
}

fn upsert_query() -> String {
    format!(
        "INSERT INTO item_meta (item_id, meta_key, meta_value) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (item_id, meta_key) \
         DO UPDATE SET \
            meta_value = EXCLUDED.meta_value, \
            updated_at = NOW() \
         RETURNING {COLUMNS}"
    )
}
