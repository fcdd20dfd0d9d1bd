//! The host storage collaborator.
//!
//! The SEO manager never talks to a database directly. It reads and writes
//! item metadata through [`FieldStore`], which the host implements (the
//! `metatag-db` crate provides a PostgreSQL implementation). A missing key
//! always reads as `""`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::fields::SeoField;
use crate::record::{FieldUpdate, SeoRecord};
use crate::types::DbId;

/// Key/value metadata storage for content items.
#[async_trait]
pub trait FieldStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read one metadata value. Unset keys return `""`.
    async fn get_field(&self, item_id: DbId, key: &str) -> Result<String, Self::Error>;

    /// Insert or overwrite one metadata value.
    async fn set_field(&self, item_id: DbId, key: &str, value: &str) -> Result<(), Self::Error>;

    /// The item's computed permanent URL.
    async fn permanent_url(&self, item_id: DbId) -> Result<String, Self::Error>;

    /// Read every SEO field of an item.
    ///
    /// The default issues one [`get_field`](Self::get_field) per field;
    /// stores that can batch should override it.
    async fn load_record(&self, item_id: DbId) -> Result<SeoRecord, Self::Error> {
        let mut record = SeoRecord::default();
        for field in SeoField::ALL {
            let value = self.get_field(item_id, field.meta_key()).await?;
            record.set(field, value);
        }
        Ok(record)
    }

    /// Write a batch of sanitized updates.
    ///
    /// The default writes one field at a time, so a failure can leave the
    /// earlier fields written. Stores with transactions should override it
    /// to write the whole batch or nothing.
    async fn apply_updates(
        &self,
        item_id: DbId,
        updates: &[FieldUpdate],
    ) -> Result<(), Self::Error> {
        for update in updates {
            self.set_field(item_id, update.meta_key(), &update.value)
                .await?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A process-local [`FieldStore`], for embedding and tests.
///
/// Thread-safe via interior `RwLock`s; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: RwLock<HashMap<(DbId, String), String>>,
    permalinks: RwLock<HashMap<DbId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the permanent URL returned for `item_id`.
    pub async fn set_permalink(&self, item_id: DbId, url: impl Into<String>) {
        self.permalinks.write().await.insert(item_id, url.into());
    }
}

#[async_trait]
impl FieldStore for MemoryStore {
    type Error = std::convert::Infallible;

    async fn get_field(&self, item_id: DbId, key: &str) -> Result<String, Self::Error> {
        Ok(self
            .fields
            .read()
            .await
            .get(&(item_id, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_field(&self, item_id: DbId, key: &str, value: &str) -> Result<(), Self::Error> {
        self.fields
            .write()
            .await
            .insert((item_id, key.to_string()), value.to_string());
        Ok(())
    }

    async fn permanent_url(&self, item_id: DbId) -> Result<String, Self::Error> {
        Ok(self
            .permalinks
            .read()
            .await
            .get(&item_id)
            .cloned()
            .unwrap_or_default())
    }
}
