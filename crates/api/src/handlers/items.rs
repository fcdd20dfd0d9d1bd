//! Handlers for content items.
//!
//! Items are the host content the SEO fields attach to. Only creation and
//! lookup are exposed; editing item bodies belongs to the host editor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use metatag_core::error::CoreError;
use metatag_core::types::DbId;
use metatag_db::models::item::{CreateItem, Item};
use metatag_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load an item or fail with 404.
pub(crate) async fn find_item(state: &AppState, id: DbId) -> AppResult<Item> {
    ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Item",
            id,
        }))
}

/// POST /api/v1/items
///
/// Create a content item. `title` and `slug` must be non-blank.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("Item title must not be empty".into()).into());
    }
    if input.slug.trim().is_empty() {
        return Err(CoreError::Validation("Item slug must not be empty".into()).into());
    }

    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, item_type = %item.item_type, "Created item");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    Ok(Json(DataResponse { data: item }))
}
