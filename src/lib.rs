//! Table of contents generation for rendered HTML content.
//!
//! [`toc`] holds the pure pipeline: add missing heading ids, collect the
//! outline, render nested list markup. [`cache`] wraps it for hosts that
//! want to reuse renders, and [`config`] loads options from files.

pub mod cache;
pub mod config;
pub mod toc;
pub mod utils;

pub use cache::{cache_key, MemoryCache, RenderCache, TocCache};
pub use toc::{ensure_heading_ids, extract_headings, generate_toc, render_toc, HeadingRecord, TocOptions};
