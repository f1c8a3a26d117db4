use std::collections::HashSet;

use log::{debug, trace};

use crate::toc::scanner::{scan_headings, strip_html_tags};

/// Fallback id for headings whose text has nothing to slugify
const FALLBACK_ID: &str = "heading";

/// Add an `id` attribute to every heading that does not already have one.
///
/// The id is a slug of the heading text. Slugs that collide with an id
/// already present on a heading, or with an earlier synthesized one, get a
/// numeric suffix (`-2`, `-3`, ...). Headings that carry an id are left
/// untouched, so running this twice yields the same output as running it once.
pub fn ensure_heading_ids(content: &str) -> String {
    let headings: Vec<_> = scan_headings(content).collect();

    let mut taken: HashSet<String> = headings
        .iter()
        .filter_map(|heading| heading.id())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    let mut output = String::with_capacity(content.len() + headings.len() * 16);
    let mut copied = 0;
    let mut added = 0;

    for heading in headings.iter().filter(|heading| heading.id().is_none()) {
        let id = unique_id(generate_id_from_text(heading.inner), &mut taken);
        trace!("Adding id \"{}\" to h{} heading", id, heading.level);

        output.push_str(&content[copied..heading.open_tag_end]);
        output.push_str(" id=\"");
        output.push_str(&html_escape::encode_double_quoted_attribute(&id));
        output.push('"');
        copied = heading.open_tag_end;
        added += 1;
    }

    if added == 0 {
        return content.to_string();
    }

    output.push_str(&content[copied..]);
    debug!("Synthesized heading ids for {} of {} headings", added, headings.len());
    output
}

/// Generate an anchor id from heading markup
pub fn generate_id_from_text(markup: &str) -> String {
    let text = strip_html_tags(markup);
    let decoded = html_escape::decode_html_entities(&text);
    let id = slug::slugify(decoded);

    if id.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        id
    }
}

/// Reserve `base`, or the first free `base-N` when it is already taken
fn unique_id(base: String, taken: &mut HashSet<String>) -> String {
    let id = if taken.contains(&base) {
        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or_default()
    } else {
        base
    };

    taken.insert(id.clone());
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_missing_ids() {
        let html = "<h2>Getting Started</h2><p>Body</p><h3 class=\"sub\">Install <em>now</em></h3>";
        let normalized = ensure_heading_ids(html);

        assert_eq!(
            normalized,
            "<h2 id=\"getting-started\">Getting Started</h2><p>Body</p>\
             <h3 class=\"sub\" id=\"install-now\">Install <em>now</em></h3>"
        );
    }

    #[test]
    fn test_existing_ids_untouched() {
        let html = r#"<h2 id="custom">Intro</h2><h2 class='a' id='kept'>Other</h2>"#;
        assert_eq!(ensure_heading_ids(html), html);
    }

    #[test]
    fn test_idempotent() {
        let html = "<h1>Title</h1>\n<h2>Intro</h2>\n<h2 id=\"intro\">Dup</h2>\n<h2>Intro</h2>\n<h4>!!!</h4>";
        let once = ensure_heading_ids(html);
        let twice = ensure_heading_ids(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collisions_get_suffixes() {
        let html = "<h2>FAQ</h2><h2>FAQ</h2><h2 id=\"faq-2\">Reserved</h2><h3>FAQ</h3>";
        let normalized = ensure_heading_ids(html);

        assert_eq!(
            normalized,
            "<h2 id=\"faq\">FAQ</h2><h2 id=\"faq-3\">FAQ</h2>\
             <h2 id=\"faq-2\">Reserved</h2><h3 id=\"faq-4\">FAQ</h3>"
        );
    }

    #[test]
    fn test_generate_id_from_text() {
        let test_cases = vec![
            ("Hello World", "hello-world"),
            ("  Step 1: Setup  ", "step-1-setup"),
            ("Q &amp; A", "q-a"),
            ("<code>fn main()</code> explained", "fn-main-explained"),
            ("---", "heading"),
            ("", "heading"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(generate_id_from_text(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_no_headings_returns_input() {
        let html = "<p>Just a paragraph</p>";
        assert_eq!(ensure_heading_ids(html), html);
    }

    #[test]
    fn test_unclosed_heading_left_alone() {
        let html = "<h2>Never closed<p>text</p>";
        assert_eq!(ensure_heading_ids(html), html);
    }
}
