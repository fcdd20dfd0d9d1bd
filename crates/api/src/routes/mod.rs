pub mod health;
pub mod items;
pub mod seo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                                   create item (POST)
/// /items/{id}                              get item
///
/// /items/{id}/seo                          stored record (GET), save form (POST), save JSON (PUT)
/// /items/{id}/seo/form                     editor form HTML
/// /items/{id}/seo/analysis                 keyword analysis JSON
/// /items/{id}/seo/analysis/panel           analysis panel HTML
///
/// /head?item_id={id}                       document head tags HTML
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router().merge(seo::item_seo_router()))
        .merge(seo::head_router())
}
