use serde::{Deserialize, Deserializer, Serialize};

/// Shallowest heading level an outline can collect
pub const MIN_DEPTH: u8 = 1;
/// Deepest heading level HTML defines
pub const MAX_DEPTH: u8 = 6;

/// A single heading found in the content, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub level: u8,
    pub id: String,
    pub title: String,
}

impl HeadingRecord {
    pub fn new(level: u8, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Labels for the show/hide control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLabels {
    /// Visible while the list is expanded, offering to collapse it
    #[serde(default = "default_expanded_label", alias = "show")]
    pub expanded: String,
    /// Visible while the list is collapsed, offering to expand it
    #[serde(default = "default_collapsed_label", alias = "hide")]
    pub collapsed: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            expanded: default_expanded_label(),
            collapsed: default_collapsed_label(),
        }
    }
}

fn default_expanded_label() -> String {
    "hide".to_string()
}

fn default_collapsed_label() -> String {
    "show".to_string()
}

/// Options for table of contents generation.
///
/// Accepts both the snake_case spelling used by widgets and shortcodes and
/// the camelCase spelling used by block attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Visual variant, emitted as a CSS class on the container
    #[serde(default = "default_style")]
    pub style: String,
    /// Heading shown above the list
    #[serde(default = "default_title")]
    pub title: String,
    /// Fewer collected headings than this suppresses the whole block
    #[serde(
        default = "default_min_headers",
        alias = "minHeaders",
        deserialize_with = "deserialize_min_headers"
    )]
    pub min_headers: usize,
    /// Deepest heading level to collect (h1 = 1, h2 = 2, etc.)
    #[serde(
        default = "default_max_depth",
        alias = "maxDepth",
        deserialize_with = "deserialize_max_depth"
    )]
    pub max_depth: u8,
    /// Prefix items with hierarchical numbers such as "2.1. "
    #[serde(default = "default_true")]
    pub numbering: bool,
    /// Emit the show/hide control
    #[serde(default = "default_true")]
    pub toggle: bool,
    #[serde(default)]
    pub labels: ToggleLabels,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            style: default_style(),
            title: default_title(),
            min_headers: default_min_headers(),
            max_depth: default_max_depth(),
            numbering: true,
            toggle: true,
            labels: ToggleLabels::default(),
        }
    }
}

impl TocOptions {
    /// Set the visual style class
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the title shown above the list
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_min_headers(mut self, min_headers: usize) -> Self {
        self.min_headers = min_headers;
        self
    }

    /// Set the deepest collected level, clamped to 1..=6
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = clamp_depth(i64::from(depth));
        self
    }

    pub fn with_numbering(mut self, numbering: bool) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_toggle(mut self, toggle: bool) -> Self {
        self.toggle = toggle;
        self
    }

    /// Copy of these options with `max_depth` forced into 1..=6.
    ///
    /// Fields are public, so values built by hand may be out of range.
    pub fn clamped(&self) -> Self {
        let mut options = self.clone();
        options.max_depth = clamp_depth(i64::from(self.max_depth));
        options
    }
}

fn default_style() -> String {
    "toc-1".to_string()
}

fn default_title() -> String {
    "Table of Contents".to_string()
}

fn default_min_headers() -> usize {
    3
}

fn default_max_depth() -> u8 {
    3
}

fn default_true() -> bool {
    true
}

fn clamp_depth(depth: i64) -> u8 {
    depth.clamp(i64::from(MIN_DEPTH), i64::from(MAX_DEPTH)) as u8
}

fn deserialize_max_depth<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_depth(raw))
}

fn deserialize_min_headers<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.max(0) as usize)
}
