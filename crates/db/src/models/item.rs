//! Content item entity model and DTOs.

use metatag_core::error::CoreError;
use metatag_core::item::ItemType;
use metatag_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A content item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    /// One of `post`, `page`, `attachment` (enforced by a CHECK constraint).
    pub item_type: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Item {
    /// Parse the stored item type.
    ///
    /// An unknown value means the row bypassed the CHECK constraint and is
    /// reported as [`CoreError::Internal`], not as a client error.
    pub fn kind(&self) -> Result<ItemType, CoreError> {
        self.item_type.parse().map_err(|_| {
            CoreError::Internal(format!(
                "item {} has unknown item_type '{}'",
                self.id, self.item_type
            ))
        })
    }
}

/// DTO for creating a new content item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    /// Defaults to `post` if omitted.
    pub item_type: Option<ItemType>,
    pub title: String,
    pub slug: String,
    pub body: Option<String>,
}
