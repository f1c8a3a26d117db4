use log::debug;
use serde::{Deserialize, Serialize};

use crate::toc::extractor::extract_headings;
use crate::toc::types::{HeadingRecord, TocOptions, MAX_DEPTH, MIN_DEPTH};

const SUBLIST_OPEN: &str = "<ol class=\"gp-toc-sublist\">";
const SUBLIST_CLOSE: &str = "</ol></li>";
/// Wraps a nested list at a level that has no heading of its own
const EMPTY_ITEM_OPEN: &str = "<li class=\"gp-toc-item gp-toc-item-empty\">";

/// Flat, document-ordered list of the headings a table of contents links to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    headings: Vec<HeadingRecord>,
}

impl Outline {
    pub fn new(headings: Vec<HeadingRecord>) -> Self {
        Self { headings }
    }

    /// Collect the outline of already normalized content
    pub fn from_html(content: &str, max_depth: u8) -> Self {
        Self::new(extract_headings(content, max_depth))
    }

    pub fn headings(&self) -> &[HeadingRecord] {
        &self.headings
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Render as nested list markup, or an empty string when suppressed
    pub fn to_html(&self, options: &TocOptions) -> String {
        build_toc_html(&self.headings, options)
    }
}

/// Render headings as a nested, optionally numbered, list.
///
/// Returns an empty string when there are no headings or fewer than
/// `options.min_headers`. Levels are taken relative to the shallowest
/// heading, which renders at the top of the list. Levels outside 1 to 6 are
/// treated as the nearest of the two.
pub fn build_toc_html(headings: &[HeadingRecord], options: &TocOptions) -> String {
    if headings.is_empty() || headings.len() < options.min_headers {
        debug!(
            "Suppressing table of contents: {} headings, {} required",
            headings.len(),
            options.min_headers
        );
        return String::new();
    }

    let depth_of = |heading: &HeadingRecord| heading.level.clamp(MIN_DEPTH, MAX_DEPTH);
    let base_level = headings.iter().map(depth_of).min().unwrap_or(MIN_DEPTH);
    let logical_level = |heading: &HeadingRecord| -> usize {
        usize::from(depth_of(heading) - base_level) + 1
    };

    let mut html = render_header(options);
    html.push_str("<div class=\"gp-toc-content\">");
    html.push_str("<ol class=\"gp-toc-list\">");

    let mut current_level = 1;
    let mut counters = [0usize; MAX_DEPTH as usize];
    // Whether the previous item was left open to host a nested list
    let mut item_open = false;

    for (index, heading) in headings.iter().enumerate() {
        let level = logical_level(heading);

        // Open nested lists, giving skipped levels an empty item to live in
        while current_level < level {
            if !item_open {
                html.push_str(EMPTY_ITEM_OPEN);
            }
            html.push_str(SUBLIST_OPEN);
            current_level += 1;
            item_open = false;
        }

        while current_level > level {
            html.push_str(SUBLIST_CLOSE);
            current_level -= 1;
        }

        let number = if options.numbering {
            counters[level - 1] += 1;
            counters[level..].iter_mut().for_each(|counter| *counter = 0);
            format_number(&counters[..level])
        } else {
            String::new()
        };

        html.push_str(&format!(
            "<li class=\"gp-toc-item gp-toc-level-{}\"><a href=\"#{}\">{}{}</a>",
            depth_of(heading),
            html_escape::encode_double_quoted_attribute(&heading.id),
            number,
            escape_text(&heading.title)
        ));

        // Leave the item open when the next heading nests under it
        item_open = headings
            .get(index + 1)
            .is_some_and(|next| logical_level(next) > level);
        if !item_open {
            html.push_str("</li>");
        }
    }

    while current_level > 1 {
        html.push_str(SUBLIST_CLOSE);
        current_level -= 1;
    }

    html.push_str("</ol>");
    html.push_str("</div>");
    html.push_str("</div>");
    html
}

fn render_header(options: &TocOptions) -> String {
    let mut classes = vec!["gp-toc", options.style.as_str()];
    if options.toggle {
        classes.push("toc-toggle");
    }
    let classes: Vec<&str> = classes.into_iter().filter(|c| !c.is_empty()).collect();

    let mut html = format!(
        "<div class=\"{}\">",
        html_escape::encode_double_quoted_attribute(&classes.join(" "))
    );
    html.push_str("<div class=\"gp-toc-header\">");
    html.push_str(&format!(
        "<h4 class=\"gp-toc-title\">{}</h4>",
        escape_text(&options.title)
    ));

    if options.toggle {
        html.push_str(&format!(
            "<span class=\"gp-toc-toggle\">[<span class=\"gp-toc-toggle-show\">{}</span>\
             <span class=\"gp-toc-toggle-hide\">{}</span>]</span>",
            escape_text(&options.labels.expanded),
            escape_text(&options.labels.collapsed)
        ));
    }

    html.push_str("</div>");
    html
}

/// "2.1. " for counters [2, 1]
fn format_number(counters: &[usize]) -> String {
    let parts: Vec<String> = counters.iter().map(|c| c.to_string()).collect();
    format!("{}. ", parts.join("."))
}

/// Escape for HTML text without double-encoding existing entities
fn escape_text(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    html_escape::encode_text(&decoded).into_owned()
}
