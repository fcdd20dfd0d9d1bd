//! Content item types and permanent URL generation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of content item a set of SEO fields is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Post,
    Page,
    Attachment,
}

impl ItemType {
    /// Item types that get the SEO settings form in the editor.
    pub const WITH_SEO_FORM: [ItemType; 2] = [Self::Post, Self::Page];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Attachment => "attachment",
        }
    }

    /// Whether the editor offers the SEO settings form for this type.
    pub fn supports_seo_form(self) -> bool {
        Self::WITH_SEO_FORM.contains(&self)
    }
}

impl std::str::FromStr for ItemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "page" => Ok(Self::Page),
            "attachment" => Ok(Self::Attachment),
            other => Err(CoreError::Validation(format!(
                "Unknown item type '{other}'"
            ))),
        }
    }
}

/// Build the permanent URL of an item.
///
/// Convention: `{site_url}/{slug}/`, with any trailing slash on `site_url`
/// dropped first.
///
/// # Examples
///
/// ```
/// use metatag_core::item::permalink;
///
/// assert_eq!(permalink("https://example.com/", "hello-world"), "https://example.com/hello-world/");
/// assert_eq!(permalink("https://example.com", "about"), "https://example.com/about/");
/// ```
pub fn permalink(site_url: &str, slug: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{slug}/")
    }
}
