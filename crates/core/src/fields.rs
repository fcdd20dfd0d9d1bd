//! SEO field definitions.
//!
//! The set of fields is fixed at compile time. Each field knows its storage
//! key (the key used with the host's key/value metadata store), the name it
//! carries in a form submission, its editor label, and which sanitizer
//! applies to it on save.

use serde::{Deserialize, Serialize};

use crate::sanitize::{sanitize_text_field, sanitize_textarea_field, sanitize_url};

// ---------------------------------------------------------------------------
// Field kind
// ---------------------------------------------------------------------------

/// Semantic type of a field, which decides sanitizing and form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line plain text. Markup stripped, whitespace collapsed.
    Text,
    /// Multi-line plain text. Markup stripped, line breaks kept.
    Textarea,
    /// A URL, normalized rather than rejected.
    Url,
}

impl FieldKind {
    /// Sanitize a submitted value according to this kind.
    pub fn sanitize(self, raw: &str) -> String {
        match self {
            Self::Text => sanitize_text_field(raw),
            Self::Textarea => sanitize_textarea_field(raw),
            Self::Url => sanitize_url(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Field enum
// ---------------------------------------------------------------------------

/// One of the seven SEO fields attached to a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoField {
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    OgTitle,
    OgDescription,
    CanonicalUrl,
    FocusKeyword,
}

impl SeoField {
    /// All fields in editor display order.
    pub const ALL: [SeoField; 7] = [
        Self::SeoTitle,
        Self::SeoDescription,
        Self::SeoKeywords,
        Self::OgTitle,
        Self::OgDescription,
        Self::CanonicalUrl,
        Self::FocusKeyword,
    ];

    /// Key under which the value is persisted in item metadata.
    pub fn meta_key(self) -> &'static str {
        match self {
            Self::SeoTitle => "_seo_title",
            Self::SeoDescription => "_seo_description",
            Self::SeoKeywords => "_seo_keywords",
            Self::OgTitle => "_og_title",
            Self::OgDescription => "_og_description",
            Self::CanonicalUrl => "_canonical_url",
            Self::FocusKeyword => "_focus_keyword",
        }
    }

    /// Name of the input in the edit form (and in a save submission).
    pub fn form_name(self) -> &'static str {
        match self {
            Self::SeoTitle => "seo_title",
            Self::SeoDescription => "seo_description",
            Self::SeoKeywords => "seo_keywords",
            Self::OgTitle => "og_title",
            Self::OgDescription => "og_description",
            Self::CanonicalUrl => "canonical_url",
            Self::FocusKeyword => "focus_keyword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SeoTitle => "SEO Title:",
            Self::SeoDescription => "SEO Description:",
            Self::SeoKeywords => "Meta Keywords:",
            Self::OgTitle => "Open Graph Title (for social sharing):",
            Self::OgDescription => "Open Graph Description (for social sharing):",
            Self::CanonicalUrl => "Canonical URL:",
            Self::FocusKeyword => "Focus Keyword:",
        }
    }

    /// Optional hint rendered below the input.
    pub fn help_text(self) -> Option<&'static str> {
        match self {
            Self::SeoKeywords => Some("Enter keywords separated by commas."),
            Self::CanonicalUrl => Some("Leave blank to use the default URL."),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::SeoDescription | Self::OgDescription => FieldKind::Textarea,
            Self::CanonicalUrl => FieldKind::Url,
            _ => FieldKind::Text,
        }
    }

    /// Look up a field by its storage key.
    pub fn from_meta_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.meta_key() == key)
    }

    /// Look up a field by its form input name.
    pub fn from_form_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.form_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_keys_are_form_names_with_underscore_prefix() {
        for field in SeoField::ALL {
            assert_eq!(field.meta_key(), format!("_{}", field.form_name()));
        }
    }

    #[test]
    fn lookup_by_key_and_name() {
        assert_eq!(
            SeoField::from_meta_key("_canonical_url"),
            Some(SeoField::CanonicalUrl)
        );
        assert_eq!(
            SeoField::from_form_name("focus_keyword"),
            Some(SeoField::FocusKeyword)
        );
        assert_eq!(SeoField::from_meta_key("seo_title"), None);
        assert_eq!(SeoField::from_form_name("_seo_title"), None);
    }

    #[test]
    fn descriptions_are_textareas_and_canonical_is_url() {
        assert_eq!(SeoField::SeoDescription.kind(), FieldKind::Textarea);
        assert_eq!(SeoField::OgDescription.kind(), FieldKind::Textarea);
        assert_eq!(SeoField::CanonicalUrl.kind(), FieldKind::Url);
        assert_eq!(SeoField::SeoKeywords.kind(), FieldKind::Text);
    }

    #[test]
    fn only_keywords_and_canonical_have_help_text() {
        let with_help: Vec<_> = SeoField::ALL
            .into_iter()
            .filter(|f| f.help_text().is_some())
            .collect();
        assert_eq!(with_help, vec![SeoField::SeoKeywords, SeoField::CanonicalUrl]);
    }
}
