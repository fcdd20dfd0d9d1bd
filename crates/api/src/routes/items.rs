//! Route definitions for content items.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes mounted at `/items`.
///
/// ```text
/// POST   /                  -> create_item
/// GET    /{id}              -> get_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(items::create_item))
        .route("/{id}", get(items::get_item))
}
