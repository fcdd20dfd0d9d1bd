//! Route definitions for the SEO metadata manager.
//!
//! Each route corresponds to one host lifecycle hook:
//! - `/seo/form` is the edit-form render
//! - `POST`/`PUT /seo` is the item save
//! - `/head` is the document head render
//! - `/seo/analysis/panel` is the edit-form-after-content render

use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

/// Item-scoped SEO routes, merged into the `/items` router.
///
/// ```text
/// GET    /{id}/seo                   -> get_seo_record
/// POST   /{id}/seo                   -> save_seo_form
/// PUT    /{id}/seo                   -> save_seo_json
/// GET    /{id}/seo/form              -> render_edit_form
/// GET    /{id}/seo/analysis          -> get_analysis
/// GET    /{id}/seo/analysis/panel    -> render_analysis_panel
/// ```
pub fn item_seo_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/seo",
            get(seo::get_seo_record)
                .post(seo::save_seo_form)
                .put(seo::save_seo_json),
        )
        .route("/{id}/seo/form", get(seo::render_edit_form))
        .route("/{id}/seo/analysis", get(seo::get_analysis))
        .route("/{id}/seo/analysis/panel", get(seo::render_analysis_panel))
}

/// Document head route mounted at the API root.
///
/// ```text
/// GET    /head?item_id={id}          -> render_head_tags
/// ```
pub fn head_router() -> Router<AppState> {
    Router::new().route("/head", get(seo::render_head_tags))
}
