//! The SEO metadata manager: the four entry points the host calls at its
//! lifecycle hooks.
//!
//! | Hook                              | Entry point                              |
//! |-----------------------------------|------------------------------------------|
//! | [`Hook::EditFormRender`]          | [`SeoManager::render_edit_form`]         |
//! | [`Hook::ItemSave`]                | [`SeoManager::persist_on_save`]          |
//! | [`Hook::DocumentHeadRender`]      | [`SeoManager::render_head_tags`]         |
//! | [`Hook::EditFormAfterContent`]    | [`SeoManager::render_analysis_panel`]    |
//!
//! The manager keeps no state of its own between calls.

use serde::Serialize;

use crate::analysis::{analyze, render_analysis_panel, KeywordAnalysis};
use crate::form::render_edit_form;
use crate::head::{render_head_tags, PageView};
use crate::item::ItemType;
use crate::record::{FieldUpdate, SeoRecord, SeoSubmission};
use crate::store::FieldStore;
use crate::types::DbId;

/// Host lifecycle points the manager is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    EditFormRender,
    ItemSave,
    DocumentHeadRender,
    EditFormAfterContent,
}

impl Hook {
    pub const ALL: [Hook; 4] = [
        Self::EditFormRender,
        Self::ItemSave,
        Self::DocumentHeadRender,
        Self::EditFormAfterContent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EditFormRender => "edit_form_render",
            Self::ItemSave => "item_save",
            Self::DocumentHeadRender => "document_head_render",
            Self::EditFormAfterContent => "edit_form_after_content",
        }
    }
}

/// Ties the renderers and sanitizers to a [`FieldStore`].
#[derive(Debug, Clone)]
pub struct SeoManager<S> {
    store: S,
}

impl<S: FieldStore> SeoManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored SEO record of an item.
    pub async fn record(&self, item_id: DbId) -> Result<SeoRecord, S::Error> {
        self.store.load_record(item_id).await
    }

    /// Render the edit form pre-filled from storage.
    ///
    /// Returns `None` for item types the form is not offered on.
    pub async fn render_edit_form(
        &self,
        item_id: DbId,
        item_type: ItemType,
    ) -> Result<Option<String>, S::Error> {
        if !item_type.supports_seo_form() {
            tracing::debug!(
                hook = Hook::EditFormRender.as_str(),
                item_id,
                item_type = item_type.as_str(),
                "Item type has no SEO form"
            );
            return Ok(None);
        }
        let record = self.store.load_record(item_id).await?;
        Ok(Some(render_edit_form(&record)))
    }

    /// Sanitize and store every field present in `submission`.
    ///
    /// Fields absent from the submission are not touched. Returns the
    /// updates that were written.
    pub async fn persist_on_save(
        &self,
        item_id: DbId,
        submission: &SeoSubmission,
    ) -> Result<Vec<FieldUpdate>, S::Error> {
        let updates = submission.updates();
        self.store.apply_updates(item_id, &updates).await?;
        tracing::info!(
            hook = Hook::ItemSave.as_str(),
            item_id,
            fields = updates.len(),
            "Saved SEO fields"
        );
        Ok(updates)
    }

    /// Render the head tags for a page view. Listing views render `""`.
    pub async fn render_head_tags(&self, view: PageView) -> Result<String, S::Error> {
        let PageView::Single { item_id } = view else {
            return Ok(String::new());
        };
        let record = self.store.load_record(item_id).await?;
        let permanent_url = self.store.permanent_url(item_id).await?;
        tracing::debug!(
            hook = Hook::DocumentHeadRender.as_str(),
            item_id,
            "Rendering head tags"
        );
        Ok(render_head_tags(&record, &permanent_url))
    }

    /// Compute the keyword analysis for an item body.
    pub async fn analyze(&self, item_id: DbId, content: &str) -> Result<KeywordAnalysis, S::Error> {
        let record = self.store.load_record(item_id).await?;
        Ok(analyze(content, &record))
    }

    /// Render the analysis panel shown after the content editor.
    pub async fn render_analysis_panel(
        &self,
        item_id: DbId,
        content: &str,
    ) -> Result<String, S::Error> {
        let analysis = self.analyze(item_id, content).await?;
        tracing::debug!(
            hook = Hook::EditFormAfterContent.as_str(),
            item_id,
            word_count = analysis.word_count,
            "Rendering analysis panel"
        );
        Ok(render_analysis_panel(&analysis))
    }
}
