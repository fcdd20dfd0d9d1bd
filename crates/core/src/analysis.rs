//! Keyword density analysis and the editor analysis panel.
//!
//! Pure computation over the item body and its stored SEO record. There is
//! no scoring: the panel reports numbers and set/missing statuses only.

use serde::Serialize;

use crate::escape::escape_html;
use crate::fields::SeoField;
use crate::record::SeoRecord;
use crate::sanitize::strip_tags;

// ---------------------------------------------------------------------------
// Density
// ---------------------------------------------------------------------------

/// Raw counts behind a density figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeywordDensity {
    /// Whitespace-separated words in the markup-stripped content.
    pub word_count: usize,
    /// Case-insensitive, non-overlapping substring hits in the raw content.
    pub keyword_count: usize,
    /// `keyword_count / word_count * 100`, rounded to two decimals; `0`
    /// when there are no words.
    pub density: f64,
}

/// Compute keyword density of `keyword` in `content`.
///
/// Words are counted after stripping markup, but the keyword is searched in
/// the raw content, so a keyword inside an attribute still counts. Matches
/// are substrings, not whole words: `cat` hits `concatenate`.
pub fn keyword_density(content: &str, keyword: &str) -> KeywordDensity {
    let word_count = strip_tags(content).split_whitespace().count();

    let keyword_count = if keyword.is_empty() {
        0
    } else {
        content
            .to_lowercase()
            .matches(keyword.to_lowercase().as_str())
            .count()
    };

    let density = if word_count > 0 {
        round2(keyword_count as f64 / word_count as f64 * 100.0)
    } else {
        0.0
    };

    KeywordDensity {
        word_count,
        keyword_count,
        density,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

/// Everything the analysis panel reports for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub focus_keyword: String,
    pub has_focus_keyword: bool,
    pub word_count: usize,
    pub keyword_count: usize,
    pub keyword_density: f64,
    pub has_seo_title: bool,
    pub has_seo_description: bool,
}

/// Analyze an item body against its stored SEO record.
pub fn analyze(content: &str, record: &SeoRecord) -> KeywordAnalysis {
    let density = keyword_density(content, &record.focus_keyword);
    KeywordAnalysis {
        focus_keyword: record.focus_keyword.clone(),
        has_focus_keyword: record.is_set(SeoField::FocusKeyword),
        word_count: density.word_count,
        keyword_count: density.keyword_count,
        keyword_density: density.density,
        has_seo_title: record.is_set(SeoField::SeoTitle),
        has_seo_description: record.is_set(SeoField::SeoDescription),
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

const OK_STYLE: &str = "color: green;";
const MISSING_STYLE: &str = "color: red;";

/// Render the "Basic SEO Analysis" panel shown below the content editor.
pub fn render_analysis_panel(analysis: &KeywordAnalysis) -> String {
    let mut lines = vec![
        "<div class=\"seo-analysis\">".to_string(),
        "<h3>Basic SEO Analysis</h3>".to_string(),
    ];

    if analysis.has_focus_keyword {
        lines.push(format!(
            "<p><strong>Focus Keyword:</strong> {}</p>",
            escape_html(&analysis.focus_keyword)
        ));
        lines.push(format!(
            "<p>Keyword Density: {:.2}%</p>",
            analysis.keyword_density
        ));
    } else {
        lines.push(status_line(false, "", "No Focus Keyword Set."));
    }

    lines.push(format!(
        "<p>Content Length: {} words</p>",
        analysis.word_count
    ));
    lines.push(status_line(
        analysis.has_seo_title,
        "SEO Title Set.",
        "SEO Title Missing.",
    ));
    lines.push(status_line(
        analysis.has_seo_description,
        "SEO Description Set.",
        "SEO Description Missing.",
    ));
    lines.push("</div>".to_string());

    let mut html = lines.join("\n");
    html.push('\n');
    html
}

fn status_line(ok: bool, ok_text: &str, missing_text: &str) -> String {
    if ok {
        format!("<p style=\"{OK_STYLE}\">{ok_text}</p>")
    } else {
        format!("<p style=\"{MISSING_STYLE}\">{missing_text}</p>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // --- Density ---

    #[test]
    fn cat_cat_dog() {
        let d = keyword_density("cat cat dog", "cat");
        assert_eq!(d.word_count, 3);
        assert_eq!(d.keyword_count, 2);
        assert!(approx(d.density, 66.67));
    }

    #[test]
    fn empty_content_has_zero_density() {
        let d = keyword_density("", "cat");
        assert_eq!(d.word_count, 0);
        assert_eq!(d.keyword_count, 0);
        assert!(approx(d.density, 0.0));
    }

    #[test]
    fn markup_only_content_has_zero_words() {
        let d = keyword_density("<p></p><br/>", "p");
        assert_eq!(d.word_count, 0);
        assert!(approx(d.density, 0.0));
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let d = keyword_density("Concatenate the CAT", "cat");
        assert_eq!(d.word_count, 3);
        assert_eq!(d.keyword_count, 2);
        assert!(approx(d.density, 66.67));
    }

    #[test]
    fn keyword_is_counted_in_raw_markup() {
        let d = keyword_density("<a href=\"/seo\">SEO</a> tips", "seo");
        assert_eq!(d.word_count, 2);
        assert_eq!(d.keyword_count, 2);
        assert!(approx(d.density, 100.0));
    }

    #[test]
    fn matches_do_not_overlap() {
        let d = keyword_density("aaaa", "aa");
        assert_eq!(d.keyword_count, 2);
    }

    #[test]
    fn empty_keyword_counts_nothing() {
        let d = keyword_density("some words here", "");
        assert_eq!(d.word_count, 3);
        assert_eq!(d.keyword_count, 0);
        assert!(approx(d.density, 0.0));
    }

    #[test]
    fn multi_word_keyword() {
        let d = keyword_density("red shoes and Red Shoes", "red shoes");
        assert_eq!(d.word_count, 5);
        assert_eq!(d.keyword_count, 2);
        assert!(approx(d.density, 40.0));
    }

    // --- Analysis ---

    #[test]
    fn analysis_reports_statuses() {
        let record = SeoRecord {
            seo_title: "T".into(),
            focus_keyword: "dog".into(),
            ..Default::default()
        };
        let a = analyze("dog day", &record);
        assert!(a.has_focus_keyword);
        assert!(a.has_seo_title);
        assert!(!a.has_seo_description);
        assert_eq!(a.word_count, 2);
        assert!(approx(a.keyword_density, 50.0));
    }

    // --- Panel ---

    #[test]
    fn panel_without_keyword() {
        let html = render_analysis_panel(&analyze("one two", &SeoRecord::default()));
        assert!(html.starts_with("<div class=\"seo-analysis\">\n<h3>Basic SEO Analysis</h3>\n"));
        assert!(html.contains("<p style=\"color: red;\">No Focus Keyword Set.</p>"));
        assert!(!html.contains("Keyword Density"));
        assert!(html.contains("<p>Content Length: 2 words</p>"));
        assert!(html.contains("<p style=\"color: red;\">SEO Title Missing.</p>"));
        assert!(html.contains("<p style=\"color: red;\">SEO Description Missing.</p>"));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn panel_with_keyword_formats_two_decimals() {
        let record = SeoRecord {
            seo_title: "T".into(),
            seo_description: "D".into(),
            focus_keyword: "<cat>".into(),
            ..Default::default()
        };
        let html = render_analysis_panel(&analyze("dog dog dog dog", &record));
        assert!(html.contains("<p><strong>Focus Keyword:</strong> &lt;cat&gt;</p>"));
        assert!(html.contains("<p>Keyword Density: 0.00%</p>"));
        assert!(html.contains("<p style=\"color: green;\">SEO Title Set.</p>"));
        assert!(html.contains("<p style=\"color: green;\">SEO Description Set.</p>"));
    }
}
