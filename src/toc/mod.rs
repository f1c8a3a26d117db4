//! Table of contents generation for rendered HTML content.
//!
//! The pipeline is a pure function of content and options:
//! heading ids are added where missing, headings are collected up to the
//! configured depth, and the outline is rendered as nested list markup.

mod extractor;
mod normalizer;
mod outline;
mod scanner;
mod types;

pub use extractor::extract_headings;
pub use normalizer::{ensure_heading_ids, generate_id_from_text};
pub use outline::{build_toc_html, Outline};
pub use scanner::{scan_headings, strip_html_tags, HeadingScanner, HeadingTag};
pub use types::{HeadingRecord, ToggleLabels, TocOptions, MAX_DEPTH, MIN_DEPTH};

use log::debug;

/// Generate table of contents markup from content whose headings already carry ids.
///
/// Returns an empty string when fewer than `min_headers` headings qualify.
pub fn generate_toc(content: &str, options: &TocOptions) -> String {
    let options = options.clamped();
    let outline = Outline::from_html(content, options.max_depth);
    debug!(
        "Found {} headings up to h{} (minimum {})",
        outline.len(),
        options.max_depth,
        options.min_headers
    );
    outline.to_html(&options)
}

/// Add missing heading ids, then generate the table of contents
pub fn render_toc(content: &str, options: &TocOptions) -> String {
    let normalized = ensure_heading_ids(content);
    generate_toc(&normalized, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"
        <p>Lead paragraph.</p>
        <h2 id="intro">Intro</h2>
        <p>Text</p>
        <h2 id="setup">Setup</h2>
        <h3 id="step-1">Step 1</h3>
        <h4 id="detail">Too deep</h4>
        <h2 id="faq">FAQ</h2>
    "#;

    #[test]
    fn test_end_to_end() {
        let options = TocOptions::default();
        let headings = extract_headings(ARTICLE, options.max_depth);
        assert_eq!(headings.len(), 4);

        let html = generate_toc(ARTICLE, &options);
        assert!(!html.is_empty());

        let expected = [
            "<a href=\"#intro\">1. Intro</a>",
            "<a href=\"#setup\">2. Setup</a>",
            "<a href=\"#step-1\">2.1. Step 1</a>",
            "<a href=\"#faq\">3. FAQ</a>",
        ];
        let mut last = 0;
        for anchor in expected {
            let pos = html.find(anchor).unwrap_or_else(|| panic!("missing {} in {}", anchor, html));
            assert!(pos >= last, "{} out of order", anchor);
            last = pos;
        }
        assert!(!html.contains("#detail"));
    }

    #[test]
    fn test_below_threshold() {
        let options = TocOptions::default().with_min_headers(5);
        assert_eq!(generate_toc(ARTICLE, &options), "");
    }

    #[test]
    fn test_threshold_counts_depth_limited_headings() {
        // Five headings in the document, but only three within depth 2
        let html = concat!(
            "<h2 id=\"a\">A</h2><h3 id=\"b\">B</h3><h2 id=\"c\">C</h2>",
            "<h3 id=\"d\">D</h3><h2 id=\"e\">E</h2>"
        );
        let options = TocOptions::default().with_min_headers(4).with_max_depth(2);
        assert_eq!(generate_toc(html, &options), "");

        let options = options.with_min_headers(3);
        assert!(!generate_toc(html, &options).is_empty());
    }

    #[test]
    fn test_render_toc_normalizes_first() {
        let html = "<h2>First Part</h2><h2>Second Part</h2><h3>Details</h3>";
        let toc = render_toc(html, &TocOptions::default());

        assert!(toc.contains("<a href=\"#first-part\">1. First Part</a>"));
        assert!(toc.contains("<a href=\"#second-part\">2. Second Part</a>"));
        assert!(toc.contains("<a href=\"#details\">2.1. Details</a>"));

        // Without normalization nothing carries an id
        assert_eq!(generate_toc(html, &TocOptions::default()), "");
    }

    #[test]
    fn test_anchors_match_injected_ids() {
        let html = "<h2>Intro</h2><h2>Intro</h2><h2>Outro</h2>";
        let normalized = ensure_heading_ids(html);
        let toc = generate_toc(&normalized, &TocOptions::default());

        for record in extract_headings(&normalized, 3) {
            assert!(normalized.contains(&format!("id=\"{}\"", record.id)));
            assert!(toc.contains(&format!("href=\"#{}\"", record.id)));
        }
        assert!(toc.contains("#intro-2"));
    }

    #[test]
    fn test_out_of_range_depth_in_options() {
        let mut options = TocOptions::default().with_min_headers(1);
        options.max_depth = 0;
        let toc = generate_toc("<h1 id=\"a\">A</h1><h2 id=\"b\">B</h2>", &options);
        assert!(toc.contains("#a"));
        assert!(!toc.contains("#b"));
    }

    #[test]
    fn test_deterministic() {
        let options = TocOptions::default();
        assert_eq!(render_toc(ARTICLE, &options), render_toc(ARTICLE, &options));
    }
}
