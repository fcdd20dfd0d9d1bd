//! Output escaping for the HTML contexts the renderers write into.

use crate::sanitize::sanitize_url;

/// Escape text for an HTML body or a quoted attribute value.
///
/// Encodes `&`, `<`, `>`, `"` and `'`. Existing entities are encoded again,
/// so `&amp;` renders literally as `&amp;`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape a value placed in an HTML attribute.
pub fn escape_attr(s: &str) -> String {
    escape_html(s)
}

/// Escape a value placed inside a `<textarea>`.
pub fn escape_textarea(s: &str) -> String {
    escape_html(s)
}

/// Normalize a URL and make it safe to place in an `href`.
///
/// Runs the storage sanitizer first, so a stored value with a disallowed
/// scheme renders as an empty `href`.
pub fn escape_url(url: &str) -> String {
    sanitize_url(url)
        .replace('&', "&#038;")
        .replace('\'', "&#039;")
}
