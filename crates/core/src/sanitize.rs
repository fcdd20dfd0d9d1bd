//! Input sanitizers applied to submitted field values before they are stored.
//!
//! None of these functions reject input. Markup is stripped and URLs are
//! coerced; a URL with a disallowed scheme collapses to the empty string.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// URL schemes that survive [`sanitize_url`]. Compared case-insensitively.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// `<script>` and `<style>` elements, removed together with their content.
static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>").expect("valid regex")
});

/// Any tag-like construct. An unterminated tag runs to end of input.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[a-zA-Z/!?][^>]*(?:>|$)").expect("valid regex"));

/// Runs of line breaks, tabs and spaces.
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));

/// A bare relative PHP script path such as `index.php?p=1`.
static SCRIPT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9-]+?\.php").expect("valid regex"));

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

/// Remove all markup from `input`, including script and style bodies.
pub fn strip_tags(input: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(input, "");
    TAG_RE.replace_all(&without_blocks, "").into_owned()
}

/// Sanitize a single-line text value.
///
/// Strips markup, collapses every run of whitespace (including line breaks
/// and tabs) into a single space, and trims.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);
    WHITESPACE_RUN_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Sanitize a multi-line text value. Like [`sanitize_text_field`] but line
/// breaks and inner whitespace are kept.
pub fn sanitize_textarea_field(input: &str) -> String {
    strip_tags(input).trim().to_string()
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Whether `c` may appear in a stored URL. Non-ASCII passes through.
fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '~'
                | '+'
                | '_'
                | '.'
                | '?'
                | '#'
                | '='
                | '!'
                | '&'
                | ';'
                | ','
                | '/'
                | ':'
                | '%'
                | '@'
                | '$'
                | '|'
                | '*'
                | '\''
                | '('
                | ')'
                | '['
                | ']'
        )
        || !c.is_ascii()
}

/// Remove percent-encoded CR/LF until none remain (removal can splice a new
/// occurrence together, e.g. `%0%0dd`).
fn strip_encoded_line_breaks(url: &str) -> String {
    const NEEDLES: [&str; 4] = ["%0d", "%0a", "%0D", "%0A"];
    let mut out = url.to_string();
    while NEEDLES.iter().any(|n| out.contains(n)) {
        for needle in NEEDLES {
            out = out.replace(needle, "");
        }
    }
    out
}

/// The scheme of `url`: text before the first `:`, provided that text
/// contains no path, query or fragment delimiter.
pub fn url_scheme(url: &str) -> Option<&str> {
    let (head, _) = url.split_once(':')?;
    if head.contains(['/', '?', '#']) {
        None
    } else {
        Some(head)
    }
}

/// Normalize a URL for storage.
///
/// - surrounding whitespace is trimmed and inner spaces become `%20`
/// - characters outside the URL-safe set are dropped
/// - a scheme-less host such as `example.com/a` gets `http://` prepended
/// - a disallowed scheme (`javascript:` and friends) yields `""`
pub fn sanitize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let filtered: String = trimmed
        .replace(' ', "%20")
        .chars()
        .filter(|c| is_url_char(*c))
        .collect();
    let mut url = strip_encoded_line_breaks(&filtered).replace(";//", "://");
    if url.is_empty() {
        return url;
    }

    if !url.contains(':')
        && !url.starts_with(['/', '#', '?'])
        && !SCRIPT_PATH_RE.is_match(&url)
    {
        url.insert_str(0, "http://");
    }

    if let Some(scheme) = url_scheme(&url) {
        let scheme = scheme.to_ascii_lowercase();
        if !ALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
            return String::new();
        }
    }

    url
}
