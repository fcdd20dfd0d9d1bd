//! Document head tags.

use serde::{Deserialize, Serialize};

use crate::escape::{escape_attr, escape_html, escape_url};
use crate::record::SeoRecord;
use crate::types::DbId;

/// What kind of page is being rendered. Head tags are only emitted for a
/// single item; listing pages (archives, search results, the front page
/// index) get nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Single { item_id: DbId },
    Listing,
}

impl PageView {
    pub fn from_item(item_id: Option<DbId>) -> Self {
        match item_id {
            Some(item_id) => Self::Single { item_id },
            None => Self::Listing,
        }
    }
}

/// Render the head tags for a single item.
///
/// Order: title, description, keywords, og:title, og:description,
/// canonical. Empty fields produce no tag at all. The canonical link is
/// always present and falls back to `permanent_url`.
pub fn render_head_tags(record: &SeoRecord, permanent_url: &str) -> String {
    let mut out = String::new();

    if !record.seo_title.is_empty() {
        out.push_str(&format!("<title>{}</title>\n", escape_html(&record.seo_title)));
    }
    push_meta(&mut out, "name", "description", &record.seo_description);
    push_meta(&mut out, "name", "keywords", &record.seo_keywords);
    push_meta(&mut out, "property", "og:title", &record.og_title);
    push_meta(&mut out, "property", "og:description", &record.og_description);

    let canonical: &str = if record.canonical_url.is_empty() {
        permanent_url
    } else {
        &record.canonical_url
    };
    out.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_url(canonical)
    ));

    out
}

fn push_meta(out: &mut String, attr: &str, name: &str, content: &str) {
    if content.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<meta {attr}=\"{name}\" content=\"{}\">\n",
        escape_attr(content)
    ));
}
