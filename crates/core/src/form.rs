//! Editor form rendering.
//!
//! Produces the HTML fragment the host places inside its "SEO Settings"
//! box. Purely presentational: values are escaped for their context and
//! nothing is validated.

use crate::escape::{escape_attr, escape_html, escape_textarea};
use crate::fields::{FieldKind, SeoField};
use crate::record::SeoRecord;

/// Title of the box the host wraps the form in.
pub const FORM_TITLE: &str = "SEO Settings";

/// Render one labelled input per SEO field, pre-filled from `record`.
pub fn render_edit_form(record: &SeoRecord) -> String {
    let mut html = String::new();
    for field in SeoField::ALL {
        render_field(&mut html, field, record.get(field));
    }
    html
}

/// Wrap a rendered form in the titled settings box.
pub fn render_settings_box(form_html: &str) -> String {
    format!(
        "<div class=\"seo-settings\">\n<h2>{}</h2>\n{form_html}</div>\n",
        escape_html(FORM_TITLE)
    )
}

fn render_field(html: &mut String, field: SeoField, value: &str) {
    let name = field.form_name();

    html.push_str("<p>\n");
    html.push_str(&format!(
        "    <label for=\"{name}\">{}</label>\n",
        escape_html(field.label())
    ));
    match field.kind() {
        FieldKind::Textarea => html.push_str(&format!(
            "    <textarea id=\"{name}\" name=\"{name}\" class=\"widefat\">{}</textarea>\n",
            escape_textarea(value)
        )),
        FieldKind::Text | FieldKind::Url => html.push_str(&format!(
            "    <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\" class=\"widefat\">\n",
            escape_attr(value)
        )),
    }
    if let Some(help) = field.help_text() {
        html.push_str(&format!("    <small>{}</small>\n", escape_html(help)));
    }
    html.push_str("</p>\n");
}
