//! The SEO record attached to a content item, and save submissions.

use serde::{Deserialize, Serialize};

use crate::fields::SeoField;

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// The stored SEO values of one item. Every field defaults to `""`, and an
/// empty field means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoRecord {
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub canonical_url: String,
    pub focus_keyword: String,
}

impl SeoRecord {
    pub fn get(&self, field: SeoField) -> &str {
        match field {
            SeoField::SeoTitle => &self.seo_title,
            SeoField::SeoDescription => &self.seo_description,
            SeoField::SeoKeywords => &self.seo_keywords,
            SeoField::OgTitle => &self.og_title,
            SeoField::OgDescription => &self.og_description,
            SeoField::CanonicalUrl => &self.canonical_url,
            SeoField::FocusKeyword => &self.focus_keyword,
        }
    }

    pub fn set(&mut self, field: SeoField, value: impl Into<String>) {
        let slot = match field {
            SeoField::SeoTitle => &mut self.seo_title,
            SeoField::SeoDescription => &mut self.seo_description,
            SeoField::SeoKeywords => &mut self.seo_keywords,
            SeoField::OgTitle => &mut self.og_title,
            SeoField::OgDescription => &mut self.og_description,
            SeoField::CanonicalUrl => &mut self.canonical_url,
            SeoField::FocusKeyword => &mut self.focus_keyword,
        };
        *slot = value.into();
    }

    pub fn is_set(&self, field: SeoField) -> bool {
        !self.get(field).is_empty()
    }

    /// Build a record from raw `(meta_key, meta_value)` rows. Keys that are
    /// not SEO fields are ignored.
    pub fn from_meta_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            if let Some(field) = SeoField::from_meta_key(key.as_ref()) {
                record.set(field, value);
            }
        }
        record
    }
}

// ---------------------------------------------------------------------------
// Save submission
// ---------------------------------------------------------------------------

/// The field values submitted with an item save.
///
/// `None` means the field was not part of the submission and must be left
/// untouched. `Some("")` is a real value and clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSubmission {
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub canonical_url: Option<String>,
    pub focus_keyword: Option<String>,
}

impl SeoSubmission {
    pub fn get(&self, field: SeoField) -> Option<&str> {
        let value = match field {
            SeoField::SeoTitle => &self.seo_title,
            SeoField::SeoDescription => &self.seo_description,
            SeoField::SeoKeywords => &self.seo_keywords,
            SeoField::OgTitle => &self.og_title,
            SeoField::OgDescription => &self.og_description,
            SeoField::CanonicalUrl => &self.canonical_url,
            SeoField::FocusKeyword => &self.focus_keyword,
        };
        value.as_deref()
    }

    /// Build a submission from decoded form pairs.
    ///
    /// Names that are not SEO inputs are ignored. A name that appears more
    /// than once keeps its last value, as browsers and PHP hosts do.
    pub fn from_form_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut submission = Self::default();
        for (name, value) in pairs {
            if let Some(field) = SeoField::from_form_name(name.as_ref()) {
                *submission.slot_mut(field) = Some(value.into());
            }
        }
        submission
    }

    fn slot_mut(&mut self, field: SeoField) -> &mut Option<String> {
        match field {
            SeoField::SeoTitle => &mut self.seo_title,
            SeoField::SeoDescription => &mut self.seo_description,
            SeoField::SeoKeywords => &mut self.seo_keywords,
            SeoField::OgTitle => &mut self.og_title,
            SeoField::OgDescription => &mut self.og_description,
            SeoField::CanonicalUrl => &mut self.canonical_url,
            SeoField::FocusKeyword => &mut self.focus_keyword,
        }
    }

    /// Sanitized updates for every field present in the submission, in
    /// field order.
    pub fn updates(&self) -> Vec<FieldUpdate> {
        SeoField::ALL
            .into_iter()
            .filter_map(|field| {
                self.get(field).map(|raw| FieldUpdate {
                    field,
                    value: field.kind().sanitize(raw),
                })
            })
            .collect()
    }
}

/// A single sanitized value ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub field: SeoField,
    pub value: String,
}

impl FieldUpdate {
    pub fn meta_key(&self) -> &'static str {
        self.field.meta_key()
    }
}
