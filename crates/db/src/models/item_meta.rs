//! Item metadata key/value model.

use metatag_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `item_meta` table. One row per `(item_id, meta_key)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemMeta {
    pub id: DbId,
    pub item_id: DbId,
    pub meta_key: String,
    pub meta_value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
