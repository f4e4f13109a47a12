//! Structured access to `<loc>`/`<lastmod>` pairs in a sitemap document.
//!
//! The sitemap is hand-maintained, so it is never re-serialized. Entries are
//! located by pattern, the marker entry is selected by its locator, and only
//! the byte range of its `<lastmod>` value is replaced.

use chrono::NaiveDate;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Matches one `<loc>` element directly followed by its `<lastmod>` element.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<loc>(?<loc>[^<]*)</loc>\s*<lastmod>(?<lastmod>[^<]*)</lastmod>").unwrap()
});

/// A sitemap entry with a last-modified field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    lastmod_span: Range<usize>,
}

impl SitemapEntry {
    /// Returns true if this entry's locator points at `page`.
    ///
    /// The host part is not compared, so staging and production sitemaps
    /// both match.
    pub fn points_at(&self, page: &str) -> bool {
        let page = page.trim_start_matches('/');
        self.loc.trim().ends_with(&format!("/{page}"))
    }
}

/// Result of touching the marker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapTouch {
    /// The marker's lastmod was rewritten.
    Updated { content: String, previous: String },
    /// The marker already carries the requested date.
    Unchanged,
    /// No entry points at the page.
    MarkerNotFound,
}

/// All `<loc>`/`<lastmod>` entries in document order.
pub fn entries(text: &str) -> Vec<SitemapEntry> {
    ENTRY_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let loc = caps.name("loc")?;
            let lastmod = caps.name("lastmod")?;
            Some(SitemapEntry {
                loc: loc.as_str().to_string(),
                lastmod: lastmod.as_str().to_string(),
                lastmod_span: lastmod.range(),
            })
        })
        .collect()
}

/// The first entry pointing at `page`.
pub fn find_marker(text: &str, page: &str) -> Option<SitemapEntry> {
    entries(text).into_iter().find(|e| e.points_at(page))
}

/// Sets the marker entry's lastmod to `date` (formatted `YYYY-MM-DD`).
///
/// Every byte outside the marker's lastmod value is kept as is.
pub fn touch(text: &str, page: &str, date: NaiveDate) -> SitemapTouch {
    let Some(marker) = find_marker(text, page) else {
        return SitemapTouch::MarkerNotFound;
    };

    let stamp = date.format("%Y-%m-%d").to_string();
    if marker.lastmod == stamp {
        return SitemapTouch::Unchanged;
    }

    let span = marker.lastmod_span;
    let mut content = String::with_capacity(text.len() - span.len() + stamp.len());
    content.push_str(&text[..span.start]);
    content.push_str(&stamp);
    content.push_str(&text[span.end..]);

    SitemapTouch::Updated {
        content,
        previous: marker.lastmod,
    }
}
