//! Handlers for the SEO metadata manager.
//!
//! Each handler resolves the item (404 if missing) and delegates to
//! [`SeoManager`](metatag_core::manager::SeoManager). HTML fragments are
//! returned as `text/html`; everything else uses the `{ "data": ... }`
//! envelope.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use metatag_core::fields::SeoField;
use metatag_core::form::render_settings_box;
use metatag_core::head::PageView;
use metatag_core::record::{SeoRecord, SeoSubmission};
use metatag_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::items::find_item;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Result of an item save.
#[derive(Debug, Serialize)]
pub struct SeoSaveResult {
    pub item_id: DbId,
    /// Fields that were part of the submission and got written.
    pub updated: Vec<SeoField>,
    /// The full record after the save.
    pub record: SeoRecord,
}

/// Query string of the head route. No `item_id` means a listing view.
#[derive(Debug, Deserialize)]
pub struct HeadQuery {
    pub item_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn save(state: &AppState, id: DbId, submission: &SeoSubmission) -> AppResult<SeoSaveResult> {
    find_item(state, id).await?;

    let seo = state.seo();
    let updates = seo.persist_on_save(id, submission).await?;
    let record = seo.record(id).await?;

    Ok(SeoSaveResult {
        item_id: id,
        updated: updates.into_iter().map(|u| u.field).collect(),
        record,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/items/{id}/seo
///
/// Return the stored SEO record. Unset fields are empty strings.
pub async fn get_seo_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_item(&state, id).await?;
    let record = state.seo().record(id).await?;
    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/items/{id}/seo/form
///
/// Render the editor form inside its "SEO Settings" box. Items whose type
/// has no SEO form get 400.
pub async fn render_edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    let item_type = item.kind()?;

    let form = state
        .seo()
        .render_edit_form(id, item_type)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "SEO settings are not available for item type '{}'",
                item_type.as_str()
            ))
        })?;

    Ok(Html(render_settings_box(&form)))
}

/// POST /api/v1/items/{id}/seo
///
/// Save a form-urlencoded submission, as posted by the editor form.
/// Unrelated inputs are ignored and a repeated input keeps its last value.
pub async fn save_seo_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let submission = SeoSubmission::from_form_pairs(pairs);
    let result = save(&state, id, &submission).await?;
    Ok(Json(DataResponse { data: result }))
}

/// PUT /api/v1/items/{id}/seo
///
/// Save a JSON submission. Keys that are absent or `null` are left unchanged.
pub async fn save_seo_json(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(submission): Json<SeoSubmission>,
) -> AppResult<impl IntoResponse> {
    let result = save(&state, id, &submission).await?;
    Ok(Json(DataResponse { data: result }))
}

/// GET /api/v1/items/{id}/seo/analysis
///
/// Keyword density and set/missing statuses for the item body.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    let analysis = state.seo().analyze(id, &item.body).await?;
    Ok(Json(DataResponse { data: analysis }))
}

/// GET /api/v1/items/{id}/seo/analysis/panel
///
/// The analysis panel shown after the content editor.
pub async fn render_analysis_panel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    let panel = state.seo().render_analysis_panel(id, &item.body).await?;
    Ok(Html(panel))
}

/// GET /api/v1/head?item_id={id}
///
/// Head tags for a page view. Without `item_id` the view is a listing and
/// the body is empty.
pub async fn render_head_tags(
    State(state): State<AppState>,
    Query(query): Query<HeadQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(id) = query.item_id {
        find_item(&state, id).await?;
    }
    let html = state
        .seo()
        .render_head_tags(PageView::from_item(query.item_id))
        .await?;
    Ok(Html(html))
}
