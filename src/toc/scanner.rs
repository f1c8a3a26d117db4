use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OPEN_TAG_REGEX: Regex = Regex::new(r"(?i)<h([1-6])(\s[^>]*)?>").unwrap();

    // The regex crate has no backreferences, so each level gets its own closing pattern
    static ref CLOSE_TAG_REGEXES: Vec<Regex> = (1..=6)
        .map(|level| Regex::new(&format!(r"(?i)</h{}\s*>", level)).unwrap())
        .collect();

    static ref ID_ATTR_REGEX: Regex = Regex::new(
        r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    ).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// A heading element located in serialized markup.
///
/// All ranges are byte offsets into the scanned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingTag<'a> {
    pub level: u8,
    /// Attribute text of the opening tag, including its leading whitespace
    pub attrs: &'a str,
    /// Markup between the opening and closing tags
    pub inner: &'a str,
    /// Position of the `>` that ends the opening tag
    pub open_tag_end: usize,
    /// The whole element, from `<hN` to the end of `</hN>`
    pub span: Range<usize>,
}

impl<'a> HeadingTag<'a> {
    /// Value of the `id` attribute, if the opening tag carries one
    pub fn id(&self) -> Option<&'a str> {
        let caps = ID_ATTR_REGEX.captures(self.attrs)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
    }

    /// Inner markup with all tags removed
    pub fn text(&self) -> String {
        strip_html_tags(self.inner)
    }
}

/// Iterator over heading elements in document order.
///
/// Matching is best effort: an opening tag without a closing tag of the same
/// level is skipped and scanning resumes right after it.
pub struct HeadingScanner<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> HeadingScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content, pos: 0 }
    }
}

impl<'a> Iterator for HeadingScanner<'a> {
    type Item = HeadingTag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.content.len() {
            let open = OPEN_TAG_REGEX.captures_at(self.content, self.pos)?;
            let whole = open.get(0)?;
            let level: u8 = open[1].parse().ok()?;

            let close_regex = &CLOSE_TAG_REGEXES[usize::from(level) - 1];
            let Some(close) = close_regex.find_at(self.content, whole.end()) else {
                self.pos = whole.end();
                continue;
            };

            // A close that only comes after another heading opens belongs to that heading
            let next_open = OPEN_TAG_REGEX.find_at(self.content, whole.end());
            if next_open.is_some_and(|next| next.start() < close.start()) {
                self.pos = whole.end();
                continue;
            }

            self.pos = close.end();
            return Some(HeadingTag {
                level,
                attrs: open.get(2).map_or("", |m| m.as_str()),
                inner: &self.content[whole.end()..close.start()],
                open_tag_end: whole.end() - 1,
                span: whole.start()..close.end(),
            });
        }

        None
    }
}

/// Scan content for heading elements
pub fn scan_headings(content: &str) -> HeadingScanner<'_> {
    HeadingScanner::new(content)
}

/// Strip HTML tags from text
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}
