use log::trace;

use crate::toc::scanner::scan_headings;
use crate::toc::types::{HeadingRecord, MAX_DEPTH, MIN_DEPTH};

/// Extract headings that carry an id, from h1 down to `max_depth`.
///
/// Headings without an id, or deeper than `max_depth`, are skipped. Malformed
/// markup is never an error; it is simply not matched.
pub fn extract_headings(content: &str, max_depth: u8) -> Vec<HeadingRecord> {
    let max_depth = max_depth.clamp(MIN_DEPTH, MAX_DEPTH);

    scan_headings(content)
        .filter(|heading| heading.level <= max_depth)
        .filter_map(|heading| {
            let id = heading.id().filter(|id| !id.is_empty())?;
            let record = HeadingRecord::new(heading.level, id, heading.text());
            trace!("Collected h{} #{}", record.level, record.id);
            Some(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings() {
        let html = r#"
            <h1 id="intro">Introduction</h1>
            <p>Some text</p>
            <h2 id="chapter-1">Chapter <em>1</em></h2>
            <h3 id="section-1-1">Section 1.1</h3>
            <h2 id="chapter-2">Chapter 2</h2>
        "#;

        let headings = extract_headings(html, 6);
        assert_eq!(headings.len(), 4);
        assert_eq!(headings[0], HeadingRecord::new(1, "intro", "Introduction"));
        assert_eq!(headings[1], HeadingRecord::new(2, "chapter-1", "Chapter 1"));
        assert_eq!(headings[3].id, "chapter-2");
    }

    #[test]
    fn test_depth_filter() {
        let html = concat!(
            "<h1 id=\"h1\">H1</h1>",
            "<h2 id=\"h2\">H2</h2>",
            "<h3 id=\"h3\">H3</h3>",
            "<h4 id=\"h4\">H4</h4>",
            "<h6 id=\"h6\">H6</h6>"
        );

        for depth in 1..=6 {
            let headings = extract_headings(html, depth);
            assert!(headings.iter().all(|h| h.level <= depth));
        }
        assert_eq!(extract_headings(html, 3).len(), 3);
        assert_eq!(extract_headings(html, 6).len(), 5);
    }

    #[test]
    fn test_out_of_range_depth_is_clamped() {
        let html = "<h1 id=\"a\">A</h1><h2 id=\"b\">B</h2><h6 id=\"c\">C</h6>";
        assert_eq!(extract_headings(html, 0).len(), 1);
        assert_eq!(extract_headings(html, 9).len(), 3);
    }

    #[test]
    fn test_headings_without_id_are_skipped() {
        let html = "<h2>No id</h2><h2 id=\"\">Empty</h2><h2 id=\"yes\">Yes</h2>";
        let headings = extract_headings(html, 3);
        assert_eq!(headings, vec![HeadingRecord::new(2, "yes", "Yes")]);
    }

    #[test]
    fn test_entities_left_as_is() {
        let html = "<h2 id=\"qa\">Q &amp; <strong>A</strong></h2>";
        let headings = extract_headings(html, 3);
        assert_eq!(headings[0].title, "Q &amp; A");
    }

    #[test]
    fn test_unclosed_heading_keeps_later_siblings() {
        let html = "<h2>Broken\n<p>x</p>\n<h2 id=\"a\">A</h2>\n<h2 id=\"b\">B</h2>\n<h2 id=\"c\">C</h2>";
        let ids: Vec<_> = extract_headings(html, 3).into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Normalizing leaves the broken opener alone instead of inventing a heading
        let normalized = crate::toc::ensure_heading_ids(html);
        assert_eq!(normalized, html);
        let ids: Vec<_> = extract_headings(&normalized, 3).into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_headings("<p>nothing</p><h2>broken", 3).is_empty());
        assert!(extract_headings("", 3).is_empty());
    }
}
