//! PostgreSQL implementation of the [`FieldStore`] collaborator.

use async_trait::async_trait;
use metatag_core::fields::SeoField;
use metatag_core::item::permalink;
use metatag_core::record::{FieldUpdate, SeoRecord};
use metatag_core::store::FieldStore;
use metatag_core::types::DbId;

use crate::repositories::{ItemMetaRepo, ItemRepo};
use crate::DbPool;

/// Reads and writes item metadata in the `item_meta` table.
///
/// Cheap to clone: holds a pool handle and the site URL permalinks are
/// built from.
#[derive(Debug, Clone)]
pub struct PgFieldStore {
    pool: DbPool,
    site_url: String,
}

impl PgFieldStore {
    pub fn new(pool: DbPool, site_url: impl Into<String>) -> Self {
        Self {
            pool,
            site_url: site_url.into(),
        }
    }
}

#[async_trait]
impl FieldStore for PgFieldStore {
    type Error = sqlx::Error;

    async fn get_field(&self, item_id: DbId, key: &str) -> Result<String, Self::Error> {
        Ok(ItemMetaRepo::get_value(&self.pool, item_id, key)
            .await?
            .unwrap_or_default())
    }

    async fn set_field(&self, item_id: DbId, key: &str, value: &str) -> Result<(), Self::Error> {
        ItemMetaRepo::upsert(&self.pool, item_id, key, value).await?;
        Ok(())
    }

    /// Fails with [`sqlx::Error::RowNotFound`] if the item does not exist.
    async fn permanent_url(&self, item_id: DbId) -> Result<String, Self::Error> {
        let slug = ItemRepo::find_slug(&self.pool, item_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(permalink(&self.site_url, &slug))
    }

    /// One query for all seven fields instead of one per field.
    async fn load_record(&self, item_id: DbId) -> Result<SeoRecord, Self::Error> {
        let keys: Vec<&str> = SeoField::ALL.iter().map(|f| f.meta_key()).collect();
        let rows = ItemMetaRepo::list_by_keys(&self.pool, item_id, &keys).await?;
        tracing::debug!(item_id, rows = rows.len(), "Loaded SEO meta rows");
        Ok(SeoRecord::from_meta_pairs(
            rows.into_iter().map(|row| (row.meta_key, row.meta_value)),
        ))
    }

    /// All updates commit together or not at all.
    async fn apply_updates(
        &self,
        item_id: DbId,
        updates: &[FieldUpdate],
    ) -> Result<(), Self::Error> {
        let pairs: Vec<(&str, &str)> = updates
            .iter()
            .map(|u| (u.meta_key(), u.value.as_str()))
            .collect();
        let rows = ItemMetaRepo::bulk_upsert(&self.pool, item_id, &pairs).await?;
        tracing::debug!(item_id, rows = rows.len(), "Stored SEO meta rows");
        Ok(())
    }
}
